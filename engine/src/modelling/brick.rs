//! Brick Shapes and Placements
//!
//! Two views of a 2x4 brick: `RectilinearBrick` is the exact grid-aligned
//! shape descriptor used as a combinatorial key by the enumerator, and
//! `Brick` is a resolved placement in the plane with a continuous angle.
//!
//! Placement angle 0 points the long axis along +y (vertical); a
//! horizontal shape is a vertical one turned a quarter clockwise.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::{
    BRICK_CENTER_TO_SIDE, BRICK_CENTER_TO_TOP, EPSILON, HALF_STUD_DISTANCE, NUMBER_OF_BOX_POIS,
    NUMBER_OF_STUDS, STUD_AND_A_HALF_DISTANCE, STUD_RADIUS,
};
use crate::geometry::{LineSegment, Point, normalize_angle};
use crate::modelling::connection_point::{ConnectionPoint, ConnectionPointKind};

// ============================================================================
// RECTILINEAR BRICK
// ============================================================================

/// Grid-aligned brick inside a strongly connected component.
///
/// Packed to 3 bytes: the enumerator stores and compares millions of
/// these. The level and the horizontal flag share one byte, with the
/// flag in bit 0.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct RectilinearBrick {
    pub x: i8,
    pub y: i8,
    level_shifted: u8,
}

static_assertions::assert_eq_size!(RectilinearBrick, [u8; 3]);

impl RectilinearBrick {
    pub fn new(x: i8, y: i8, level: i8, horizontal: bool) -> Self {
        debug_assert!((0..64).contains(&level));
        Self {
            x,
            y,
            level_shifted: ((level as u8) << 1) | horizontal as u8,
        }
    }

    pub fn horizontal(&self) -> bool {
        self.level_shifted & 1 == 1
    }

    pub fn level(&self) -> i8 {
        (self.level_shifted >> 1) as i8
    }
}

// ============================================================================
// RESOLVED PLACEMENT
// ============================================================================

/// A brick at any position and rotation in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Brick {
    pub center: Point,
    pub angle: f64,
    pub level: i8,
}

impl Brick {
    /// Axis placement of a grid shape: no continuous rotation yet.
    pub fn from_shape(shape: RectilinearBrick) -> Self {
        Self {
            center: Point::new(shape.x as f64, shape.y as f64),
            angle: if shape.horizontal() {
                -std::f64::consts::FRAC_PI_2
            } else {
                0.0
            },
            level: shape.level(),
        }
    }

    /// Places `shape` relative to an already-resolved placement of its
    /// component: the shape's grid offset turns with the base angle.
    pub fn from_attached(base: &Brick, shape: RectilinearBrick) -> Self {
        let mut angle = base.angle;
        let offset = DVec2::from_angle(angle).rotate(Point::new(shape.x as f64, shape.y as f64));
        if shape.horizontal() {
            angle -= std::f64::consts::FRAC_PI_2;
        }
        Self {
            center: base.center + offset,
            angle: normalize_angle(angle),
            level: base.level + shape.level(),
        }
    }

    /// Main constructor: place `shape` so that the stud under `point`
    /// lands on `origin` with the whole block turned to `origin_angle`.
    pub fn anchored(
        shape: RectilinearBrick,
        point: &ConnectionPoint,
        origin: Point,
        origin_angle: f64,
        origin_level: i8,
    ) -> Self {
        let level = shape.level() + origin_level - point.brick.level();
        debug_assert!((-8..8).contains(&level));

        let mut angle = origin_angle;
        if point.brick.horizontal() {
            angle += std::f64::consts::FRAC_PI_2;
        }
        // Center relative to the connection stud, turned into place and
        // translated onto the origin.
        let local = Point::new(shape.x as f64 - point.x(), shape.y as f64 - point.y());
        let center = DVec2::from_angle(angle).rotate(local) + origin;
        if shape.horizontal() {
            angle -= std::f64::consts::FRAC_PI_2;
        }
        Self {
            center,
            angle: normalize_angle(angle),
            level,
        }
    }

    /// World position of one of the four outer (connection) studs.
    pub fn stud_position(&self, kind: ConnectionPointKind) -> Point {
        let dx = HALF_STUD_DISTANCE;
        let dy = STUD_AND_A_HALF_DISTANCE;
        let local = match kind {
            ConnectionPointKind::NW => Point::new(-dx, dy),
            ConnectionPointKind::NE => Point::new(dx, dy),
            ConnectionPointKind::SE => Point::new(dx, -dy),
            ConnectionPointKind::SW => Point::new(-dx, -dy),
        };
        self.center + DVec2::from_angle(self.angle).rotate(local)
    }

    /// World positions of all 8 studs: 4 inner first, then the 4 outer
    /// connection studs, each group in NW, NE, SE, SW order.
    pub fn stud_positions(&self) -> [Point; NUMBER_OF_STUDS] {
        let rot = DVec2::from_angle(self.angle);
        let dx = HALF_STUD_DISTANCE;
        let mut studs = [Point::ZERO; NUMBER_OF_STUDS];
        for (row, &dy) in [HALF_STUD_DISTANCE, STUD_AND_A_HALF_DISTANCE].iter().enumerate() {
            let corners = [(-dx, dy), (dx, dy), (dx, -dy), (-dx, -dy)];
            for (i, &(lx, ly)) in corners.iter().enumerate() {
                studs[row * 4 + i] = self.center + rot.rotate(Point::new(lx, ly));
            }
        }
        studs
    }

    /// Box points of interest: 4 corners, 2 inner points, 4 side
    /// midpoints. The first [`crate::constants::NUMBER_OF_FANS`] of
    /// these trace the swept fans of a turning brick.
    pub fn box_pois(&self) -> [Point; NUMBER_OF_BOX_POIS] {
        let rot = DVec2::from_angle(self.angle);
        let dx = BRICK_CENTER_TO_SIDE;
        let dy = BRICK_CENTER_TO_TOP;
        let locals = [
            (-dx, dy),
            (dx, dy),
            (dx, -dy),
            (-dx, -dy),
            (0.0, -0.75),
            (0.0, 0.75),
            (dx, 0.0),
            (-dx, 0.0),
            (0.0, -dy),
            (0.0, dy),
        ];
        locals.map(|(lx, ly)| self.center + rot.rotate(Point::new(lx, ly)))
    }

    /// The four sides of the brick box, in world coordinates.
    pub fn box_line_segments(&self) -> [LineSegment; 4] {
        let rot = DVec2::from_angle(self.angle);
        let dx = BRICK_CENTER_TO_SIDE;
        let dy = BRICK_CENTER_TO_TOP;
        let corner =
            |lx: f64, ly: f64| self.center + rot.rotate(Point::new(lx, ly));
        let nw = corner(-dx, dy);
        let ne = corner(dx, dy);
        let se = corner(dx, -dy);
        let sw = corner(-dx, -dy);
        [
            LineSegment::new(nw, ne),
            LineSegment::new(ne, se),
            LineSegment::new(se, sw),
            LineSegment::new(sw, nw),
        ]
    }

    /// Re-expresses a world point in this brick's axis-aligned frame.
    fn to_local(&self, p: Point) -> Point {
        DVec2::from_angle(-self.angle).rotate(p - self.center)
    }

    /// True if a stud disk at world position `stud` overlaps this
    /// brick's box. The box corners are rounded by the stud radius, so
    /// near a corner the test falls back to a corner-circle check.
    pub fn box_intersects_stud(&self, stud: Point) -> bool {
        let p = self.to_local(stud).abs();
        let corner = Point::new(BRICK_CENTER_TO_SIDE, BRICK_CENTER_TO_TOP);
        if p.x >= corner.x + STUD_RADIUS || p.y >= corner.y + STUD_RADIUS {
            return false;
        }
        if p.x < corner.x || p.y < corner.y {
            return true;
        }
        STUD_RADIUS * STUD_RADIUS > (p - corner).length_squared()
    }

    fn box_contains_poi_from(&self, other: &Brick) -> bool {
        other.box_pois().iter().any(|&poi| {
            let p = self.to_local(poi).abs();
            p.x + EPSILON < BRICK_CENTER_TO_SIDE && p.y + EPSILON < BRICK_CENTER_TO_TOP
        })
    }

    /// Box overlap test for two placements at the same level. Checked
    /// both ways: crossing boxes may each hold only the other's side
    /// midpoints.
    pub fn boxes_intersect(&self, other: &Brick) -> bool {
        self.box_contains_poi_from(other) || other.box_contains_poi_from(self)
    }
}
