//! Geometric Constants
//!
//! Centralized constants for the brick geometry. Every floating-point
//! comparison in the crate goes through the single `EPSILON` tolerance so
//! that logically equivalent tests evaluated in different call orders
//! never disagree.
//!
//! Distances are in stud units (one stud spacing = 1.0).

/// Shared tolerance for angle and distance equality tests.
pub const EPSILON: f64 = 1e-6;

/// Radius of a stud.
pub const STUD_RADIUS: f64 = 0.3;

/// Diameter of a stud.
pub const STUD_DIAM: f64 = STUD_RADIUS + STUD_RADIUS;

/// Maximum rotation permitted between two connected blocks before a
/// discrete re-check of the geometry is required.
pub const MAX_ANGLE_RADIANS: f64 = 0.664054277;

/// Offset from a brick's grid position to the near stud column.
pub const HALF_STUD_DISTANCE: f64 = 0.5;

/// Offset from a brick's grid position to the far stud column.
pub const STUD_AND_A_HALF_DISTANCE: f64 = 1.5;

/// Half-width of the brick box (center to long side).
pub const BRICK_CENTER_TO_SIDE: f64 = 0.9875;

/// Half-length of the brick box (center to short side).
pub const BRICK_CENTER_TO_TOP: f64 = 1.9875;

/// Studs on a 2x4 brick.
pub const NUMBER_OF_STUDS: usize = 8;

/// Box points of interest per brick: 4 corners, 2 inner points, 4 side
/// midpoints.
pub const NUMBER_OF_BOX_POIS: usize = 10;

/// Fans swept per turning brick: the 4 corners and 2 inner points.
pub const NUMBER_OF_FANS: usize = 6;
