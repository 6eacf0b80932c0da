//! Brick modelling: combinatorial connection keys, resolved placements
//! and the swept geometry of a turning block.

pub mod assembly;
pub mod brick;
pub mod connection_point;
pub mod turning;

pub use assembly::Assembly;
pub use brick::{Brick, RectilinearBrick};
pub use connection_point::{
    BrickIdentifier, ConnectionPair, ConnectionPoint, ConnectionPointKind, IndexedConnectionPoint,
    UNASSIGNED_BRICK,
};
pub use turning::{Fan, MovingStud, TurningSingleBrick};
