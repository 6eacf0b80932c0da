//! Connection Points and Brick Identifiers
//!
//! Exact combinatorial keys describing where and how two bricks touch,
//! independent of any continuous rotation. A connection point sits on
//! one of the four outer studs of its owning brick; the kind names the
//! stud corner, `above` tells which side of the brick connects.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::constants::{HALF_STUD_DISTANCE, STUD_AND_A_HALF_DISTANCE};
use crate::modelling::brick::RectilinearBrick;

// ============================================================================
// CONNECTION POINT KIND
// ============================================================================

/// The four outer stud corners of a brick.
///
/// The numeric order matters: turning an assembly 180 degrees about a
/// pivot advances the kind by two steps around the ring, and the
/// quarter-turn count between two kinds feeds the base-angle formula of
/// the turning orchestrator.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum ConnectionPointKind {
    NW = 0,
    NE = 1,
    SE = 2,
    SW = 3,
}

impl ConnectionPointKind {
    pub const ALL: [Self; 4] = [Self::NW, Self::NE, Self::SE, Self::SW];

    /// The kind after a 180 degree turn of the whole assembly.
    pub fn rotated(self) -> Self {
        match self {
            Self::NW => Self::SE,
            Self::NE => Self::SW,
            Self::SE => Self::NW,
            Self::SW => Self::NE,
        }
    }

    /// Signed quarter turns separating this kind from `from`, offset by
    /// the half turn inherent in two bricks facing each other.
    pub fn quarter_turns_from(self, from: Self) -> i32 {
        self as i32 - from as i32 - 2
    }
}

impl fmt::Display for ConnectionPointKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NW => "NW",
            Self::NE => "NE",
            Self::SE => "SE",
            Self::SW => "SW",
        };
        write!(f, "{name}")
    }
}

// ============================================================================
// CONNECTION POINT
// ============================================================================

/// Owner slot value for a point not yet placed in a search structure.
pub const UNASSIGNED_BRICK: i16 = -1;

/// A stud-level attachment location on a brick.
///
/// Identity (equality, ordering, hashing) is the triple (brick, kind,
/// above); `brick_index` is bookkeeping for the current search structure
/// and never participates in identity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ConnectionPoint {
    pub kind: ConnectionPointKind,
    pub brick: RectilinearBrick,
    pub above: bool,
    /// Owner slot in the current search structure.
    pub brick_index: i16,
}

static_assertions::assert_eq_size!(ConnectionPoint, [u8; 8]);

impl ConnectionPoint {
    pub fn new(kind: ConnectionPointKind, brick: RectilinearBrick, above: bool, brick_index: i16) -> Self {
        Self {
            kind,
            brick,
            above,
            brick_index,
        }
    }

    /// Reinterprets this point after a 180 degree turn of the whole
    /// assembly about `pivot`: the kind advances two steps, the owning
    /// brick's grid position reflects about the pivot, and the owner
    /// slot resets to unassigned.
    pub fn rotated_about(&self, pivot: (i8, i8)) -> Self {
        Self {
            kind: self.kind.rotated(),
            brick: RectilinearBrick::new(
                pivot.0 - self.brick.x,
                pivot.1 - self.brick.y,
                self.brick.level(),
                self.brick.horizontal(),
            ),
            above: self.above,
            brick_index: UNASSIGNED_BRICK,
        }
    }

    /// Exact x offset of the stud under this point.
    pub fn x(&self) -> f64 {
        let x = self.brick.x as f64;
        if self.brick.horizontal() {
            match self.kind {
                ConnectionPointKind::SW | ConnectionPointKind::SE => x - STUD_AND_A_HALF_DISTANCE,
                _ => x + STUD_AND_A_HALF_DISTANCE,
            }
        } else {
            match self.kind {
                ConnectionPointKind::NW | ConnectionPointKind::SW => x - HALF_STUD_DISTANCE,
                _ => x + HALF_STUD_DISTANCE,
            }
        }
    }

    /// Exact y offset of the stud under this point.
    pub fn y(&self) -> f64 {
        let y = self.brick.y as f64;
        if self.brick.horizontal() {
            match self.kind {
                ConnectionPointKind::SW | ConnectionPointKind::NW => y + HALF_STUD_DISTANCE,
                _ => y - HALF_STUD_DISTANCE,
            }
        } else {
            match self.kind {
                ConnectionPointKind::SW | ConnectionPointKind::SE => y - STUD_AND_A_HALF_DISTANCE,
                _ => y + STUD_AND_A_HALF_DISTANCE,
            }
        }
    }

    /// x of the point on a coarse 4x4-unit footprint of the brick.
    pub fn x4x4(&self) -> i8 {
        if self.brick.horizontal() {
            match self.kind {
                ConnectionPointKind::SW | ConnectionPointKind::SE => self.brick.x,
                _ => self.brick.x + 3,
            }
        } else {
            match self.kind {
                ConnectionPointKind::NW | ConnectionPointKind::SW => self.brick.x + 1,
                _ => self.brick.x + 2,
            }
        }
    }

    /// y of the point on a coarse 4x4-unit footprint of the brick.
    pub fn y4x4(&self) -> i8 {
        if self.brick.horizontal() {
            match self.kind {
                ConnectionPointKind::SW | ConnectionPointKind::NW => self.brick.y + 2,
                _ => self.brick.y + 1,
            }
        } else {
            match self.kind {
                ConnectionPointKind::SW | ConnectionPointKind::SE => self.brick.y,
                _ => self.brick.y + 3,
            }
        }
    }

    /// Vertical level of the connecting side: one above or one below
    /// the owning brick.
    pub fn level(&self) -> i8 {
        if self.above {
            self.brick.level() + 1
        } else {
            self.brick.level() - 1
        }
    }

    /// True if the two points are forced into rigid adjacency: same
    /// level and coarse grid positions exactly one unit apart along
    /// exactly one axis. Symmetric by construction.
    pub fn angle_locks(&self, other: &ConnectionPoint) -> bool {
        if self.level() != other.level() {
            return false;
        }
        let dx = (self.x4x4() as i32 - other.x4x4() as i32).abs();
        let dy = (self.y4x4() as i32 - other.y4x4() as i32).abs();
        (dx == 1 && dy == 0) || (dy == 1 && dx == 0)
    }

    fn identity(&self) -> (RectilinearBrick, ConnectionPointKind, bool) {
        (self.brick, self.kind, self.above)
    }
}

impl PartialEq for ConnectionPoint {
    fn eq(&self, other: &Self) -> bool {
        self.identity() == other.identity()
    }
}

impl Eq for ConnectionPoint {}

impl PartialOrd for ConnectionPoint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ConnectionPoint {
    fn cmp(&self, other: &Self) -> Ordering {
        self.identity().cmp(&other.identity())
    }
}

impl Hash for ConnectionPoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity().hash(state);
    }
}

impl fmt::Display for ConnectionPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side = if self.above { "A" } else { "B" };
        write!(f, "{side}{}", self.kind)
    }
}

// ============================================================================
// BRICK IDENTIFIER
// ============================================================================

/// Composite key locating a brick's origin across the layered
/// enumeration: source file of strongly connected components, brick slot
/// within the component, and which instantiation of the component is
/// active. Ordering is lexicographic in that field order.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
pub struct BrickIdentifier {
    pub scc_in_file: u64,
    pub brick_index_in_scc: u32,
    pub configuration_scc_i: u32,
}

impl BrickIdentifier {
    pub fn new(scc_in_file: u64, brick_index_in_scc: u32, configuration_scc_i: u32) -> Self {
        Self {
            scc_in_file,
            brick_index_in_scc,
            configuration_scc_i,
        }
    }
}

impl fmt::Display for BrickIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        if self.scc_in_file != 0 {
            write!(f, "scc={}", self.scc_in_file)?;
            first = false;
        }
        if self.brick_index_in_scc != 0 {
            if !first {
                write!(f, ",")?;
            }
            write!(f, "brick={}", self.brick_index_in_scc)?;
            first = false;
        }
        if self.configuration_scc_i != 0 {
            if !first {
                write!(f, ",")?;
            }
            write!(f, "config={}", self.configuration_scc_i)?;
        }
        Ok(())
    }
}

// ============================================================================
// CONNECTION PAIR
// ============================================================================

/// A connection point tagged with the identifier of its owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexedConnectionPoint {
    pub identifier: BrickIdentifier,
    pub point: ConnectionPoint,
}

impl fmt::Display for IndexedConnectionPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.identifier, self.point)
    }
}

/// One candidate edge in the connection search graph: the point on the
/// already-placed side and the point on the attaching block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionPair {
    pub placed: IndexedConnectionPoint,
    pub attaching: IndexedConnectionPoint,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(kind: ConnectionPointKind, x: i8, y: i8, above: bool) -> ConnectionPoint {
        ConnectionPoint::new(kind, RectilinearBrick::new(x, y, 1, false), above, 3)
    }

    #[test]
    fn test_kind_rotated_is_half_turn() {
        for kind in ConnectionPointKind::ALL {
            assert_eq!(kind.rotated().rotated(), kind);
            assert_eq!((kind.rotated() as u8 + 2) % 4, kind as u8 % 4);
        }
    }

    #[test]
    fn test_double_rotation_restores_identity() {
        let p = point(ConnectionPointKind::NE, 2, -1, true);
        let pivot = (5, 3);
        let once = p.rotated_about(pivot);
        let twice = once.rotated_about(pivot);
        // Same identity as the original, but the owner slot is gone.
        assert_eq!(twice, p);
        assert_eq!(once.brick_index, UNASSIGNED_BRICK);
        assert_eq!(twice.brick_index, UNASSIGNED_BRICK);
        assert_ne!(once, p);
    }

    #[test]
    fn test_rotation_reflects_brick_about_pivot() {
        let p = point(ConnectionPointKind::NW, 2, -1, false);
        let rotated = p.rotated_about((4, 4));
        assert_eq!(rotated.kind, ConnectionPointKind::SE);
        assert_eq!(rotated.brick.x, 2);
        assert_eq!(rotated.brick.y, 5);
        assert_eq!(rotated.brick.level(), p.brick.level());
    }

    #[test]
    fn test_identity_excludes_owner_slot() {
        let a = point(ConnectionPointKind::SW, 0, 0, true);
        let mut b = a;
        b.brick_index = 17;
        assert_eq!(a, b);
        assert_eq!(a.cmp(&b), Ordering::Equal);
    }

    #[test]
    fn test_angle_locks_adjacent_points() {
        // Two vertical bricks side by side: NE of the left brick and NW
        // of the right brick sit one coarse unit apart.
        let left = point(ConnectionPointKind::NE, 0, 0, true);
        let right = point(ConnectionPointKind::NW, 1, 0, true);
        assert_eq!(left.x4x4(), 2);
        assert_eq!(right.x4x4(), 2);
        // Same coarse position: not a lock.
        assert!(!left.angle_locks(&right));

        let farther = point(ConnectionPointKind::NW, 2, 0, true);
        assert_eq!(farther.x4x4(), 3);
        assert!(left.angle_locks(&farther));
        assert!(farther.angle_locks(&left), "angle lock must be symmetric");
    }

    #[test]
    fn test_angle_locks_needs_same_level() {
        let above = point(ConnectionPointKind::NE, 0, 0, true);
        let below = point(ConnectionPointKind::NW, 2, 0, false);
        assert!(!above.angle_locks(&below));
    }

    #[test]
    fn test_identifier_order_is_lexicographic() {
        let a = BrickIdentifier::new(1, 0, 9);
        let b = BrickIdentifier::new(1, 1, 0);
        let c = BrickIdentifier::new(2, 0, 0);
        assert!(a < b && b < c && a < c);
        assert_eq!(a.cmp(&a), Ordering::Equal);
        assert_eq!(a, BrickIdentifier::new(1, 0, 9));
    }

    #[test]
    fn test_identifier_display_omits_zero_fields() {
        assert_eq!(BrickIdentifier::new(0, 0, 0).to_string(), "");
        assert_eq!(BrickIdentifier::new(2, 0, 0).to_string(), "scc=2");
        assert_eq!(
            BrickIdentifier::new(2, 1, 3).to_string(),
            "scc=2,brick=1,config=3"
        );
        assert_eq!(BrickIdentifier::new(0, 0, 4).to_string(), "config=4");
    }

    #[test]
    fn test_point_display() {
        let p = point(ConnectionPointKind::SE, 0, 0, true);
        assert_eq!(p.to_string(), "ASE");
        let q = point(ConnectionPointKind::NW, 0, 0, false);
        assert_eq!(q.to_string(), "BNW");
    }

    #[test]
    fn test_identifier_serializes_by_field_name() {
        let id = BrickIdentifier::new(7, 2, 1);
        let json = serde_json::to_string(&id).unwrap();
        assert!(json.contains("\"scc_in_file\":7"));
        let back: BrickIdentifier = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
