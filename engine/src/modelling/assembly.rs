//! Resolved Assembly
//!
//! The already-placed side of a candidate connection: original bricks of
//! the model, resolved to world placements and indexed by the
//! configuration slot their identifiers carry.

use crate::modelling::brick::Brick;

/// Already-resolved original bricks of the model under construction.
#[derive(Debug, Clone, Default)]
pub struct Assembly {
    pub original_bricks: Vec<Brick>,
}

impl Assembly {
    pub fn new(original_bricks: Vec<Brick>) -> Self {
        Self { original_bricks }
    }

    /// The resolved original brick behind a configuration slot.
    pub fn original(&self, configuration_scc_i: u32) -> &Brick {
        &self.original_bricks[configuration_scc_i as usize]
    }
}
