//! Turning Single Brick
//!
//! The swept geometry of one block rotating on a single stud connection.
//! From a resolved previous placement and a connection pair, the
//! orchestrator derives the two extremal rotated placements of the new
//! block, the unrotated reference placement, the fans traced by the box
//! points of interest, and one moving stud per stud of the block.
//!
//! Everything here lives in the rotation frame: the connection stud sits
//! at the origin and callers translate already-placed geometry by
//! `stud_translation` before testing against it.

use std::fmt;

use glam::DVec2;

use crate::constants::{
    EPSILON, MAX_ANGLE_RADIANS, NUMBER_OF_FANS, NUMBER_OF_STUDS, STUD_DIAM, STUD_RADIUS,
};
use crate::geometry::{
    LineSegment, Point, RadianInterval, angle_of_point, circle_cutout_intersects_line_segment,
};
use crate::modelling::assembly::Assembly;
use crate::modelling::brick::{Brick, RectilinearBrick};
use crate::modelling::connection_point::ConnectionPair;

// ============================================================================
// FAN
// ============================================================================

/// A circular wedge: the arc at fixed radius between two angles,
/// centered on the rotation origin. Angle 0 is horizontal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fan {
    pub radius: f64,
    pub interval: RadianInterval,
}

impl Fan {
    pub fn new(radius: f64, interval: RadianInterval) -> Self {
        Self { radius, interval }
    }

    /// A fan intersects a line segment if the segment crosses the arc
    /// between the interval's angles.
    pub fn intersects_line_segment(&self, segment: &LineSegment) -> bool {
        circle_cutout_intersects_line_segment(self.radius, &self.interval, segment)
    }

    /// A fan intersects a stud if the stud center is within reach of
    /// the arc radius and lies between the interval's angles.
    ///
    /// The distance test is one-sided (a disk, not an annulus): annulus
    /// behavior comes from composing an inner and an outer wall fan,
    /// which is what the moving stud does.
    pub fn intersects_stud(&self, stud: Point) -> bool {
        let reach = self.radius + STUD_RADIUS;
        stud.length_squared() < reach * reach && self.interval.contains(angle_of_point(stud))
    }

    /// A fan intersects a brick box if any of the four box sides
    /// crosses the arc.
    pub fn intersects_box(&self, brick: &Brick) -> bool {
        brick
            .box_line_segments()
            .iter()
            .any(|segment| self.intersects_line_segment(segment))
    }
}

impl fmt::Display for Fan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Fan[r={},min={},max={}]",
            self.radius, self.interval.min, self.interval.max
        )
    }
}

// ============================================================================
// MOVING STUD
// ============================================================================

/// The region swept by a stud of nonzero radius moving along a circular
/// path between two angles: an annular tract plus a solid end-cap disk
/// at each end of the sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovingStud {
    pub radius: f64,
    pub interval: RadianInterval,
}

impl MovingStud {
    pub fn new(radius: f64, interval: RadianInterval) -> Self {
        Self { radius, interval }
    }

    /// Degenerate sweep of a stud sitting on the rotation center: no
    /// meaningful angle, so the interval is the full circle.
    pub fn full_circle() -> Self {
        Self {
            radius: 0.0,
            interval: RadianInterval::full_circle(),
        }
    }

    /// Stud center at the interval's first angle.
    pub fn min_point(&self) -> Point {
        DVec2::from_angle(self.interval.min) * self.radius
    }

    /// Stud center at the interval's second angle.
    pub fn max_point(&self) -> Point {
        DVec2::from_angle(self.interval.max) * self.radius
    }

    /// A tract intersects a line segment if both segment endpoints lie
    /// inside the tract, or if the segment crosses the inner or outer
    /// tract wall.
    fn tract_intersects_line_segment(&self, segment: &LineSegment) -> bool {
        let inner_wall = self.radius - STUD_RADIUS;
        let outer_wall = self.radius + STUD_RADIUS;
        let norm_from = segment.from.length();
        let norm_to = segment.to.length();

        let endpoints_between_walls = inner_wall <= norm_from
            && norm_from <= outer_wall
            && inner_wall <= norm_to
            && norm_to <= outer_wall;
        let endpoints_inside = endpoints_between_walls
            && (self.interval.contains(angle_of_point(segment.from))
                || self.interval.contains(angle_of_point(segment.to)));
        endpoints_inside
            || Fan::new(inner_wall, self.interval).intersects_line_segment(segment)
            || Fan::new(outer_wall, self.interval).intersects_line_segment(segment)
    }

    /// A moving stud intersects a stud if the stud lies in the swept
    /// tract between the interval's angles, or within either solid
    /// end cap.
    pub fn intersects_stud(&self, stud: Point) -> bool {
        let inner = self.radius - STUD_DIAM;
        let outer = self.radius + STUD_DIAM;
        let dist_sq = stud.length_squared();
        let in_tract = dist_sq > inner * inner
            && dist_sq < outer * outer
            && self.interval.contains(angle_of_point(stud));
        if in_tract {
            return true;
        }
        stud.distance_squared(self.min_point()) < STUD_DIAM * STUD_DIAM
            || stud.distance_squared(self.max_point()) < STUD_DIAM * STUD_DIAM
    }

    /// A moving stud intersects a brick box if the tract crosses one of
    /// the box sides, or an end cap overlaps the box.
    pub fn intersects_box(&self, brick: &Brick) -> bool {
        brick
            .box_line_segments()
            .iter()
            .any(|segment| self.tract_intersects_line_segment(segment))
            || brick.box_intersects_stud(self.min_point())
            || brick.box_intersects_stud(self.max_point())
    }
}

impl fmt::Display for MovingStud {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MovingStud[r={},min={},max={}]",
            self.radius, self.interval.min, self.interval.max
        )
    }
}

// ============================================================================
// TURNING SINGLE BRICK
// ============================================================================

/// The full swept geometry of one candidate attachment.
///
/// `blocks` holds the two extremal placements of the attaching block at
/// the rotation limits, `block_above` the unrotated reference placement.
/// All placements carry zero local translation; `stud_translation` is
/// the world position of the connection stud, applied by the caller.
#[derive(Debug, Clone)]
pub struct TurningSingleBrick {
    pub blocks: [Brick; 2],
    pub block_above: Brick,
    pub fans: [Fan; NUMBER_OF_FANS],
    pub moving_studs: [MovingStud; NUMBER_OF_STUDS],
    pub stud_translation: Point,
}

impl TurningSingleBrick {
    /// Builds the swept geometry for attaching `shape` along the
    /// connection `pair`, with the already-placed side resolved through
    /// `assembly`.
    pub fn new(assembly: &Assembly, pair: &ConnectionPair, shape: RectilinearBrick) -> Self {
        let (blocks, block_above, stud_translation) =
            Self::create_bricks_and_stud_translation(assembly, pair, shape);
        let fans = Self::create_fans(&blocks);
        let moving_studs = Self::create_moving_studs(&blocks);
        Self {
            blocks,
            block_above,
            fans,
            moving_studs,
            stud_translation,
        }
    }

    fn create_bricks_and_stud_translation(
        assembly: &Assembly,
        pair: &ConnectionPair,
        shape: RectilinearBrick,
    ) -> ([Brick; 2], Brick, Point) {
        let prev_orig = assembly.original(pair.placed.identifier.configuration_scc_i);
        let prev_point = &pair.placed.point;
        let curr_point = &pair.attaching.point;

        let prev_brick = Brick::from_attached(prev_orig, prev_point.brick);
        let stud_translation = prev_brick.stud_position(prev_point.kind);

        // Quarter-turn correction from the relative orientation of the
        // two connection kinds.
        let angle = prev_brick.angle
            + std::f64::consts::FRAC_PI_2
                * curr_point.kind.quarter_turns_from(prev_point.kind) as f64;
        let level = prev_orig.level + prev_point.level();

        let place = |a: f64| Brick::anchored(shape, curr_point, Point::ZERO, a, level);
        (
            [
                place(angle - MAX_ANGLE_RADIANS),
                place(angle + MAX_ANGLE_RADIANS),
            ],
            place(angle),
            stud_translation,
        )
    }

    fn create_fans(blocks: &[Brick; 2]) -> [Fan; NUMBER_OF_FANS] {
        let pois_min = blocks[0].box_pois();
        let pois_max = blocks[1].box_pois();
        std::array::from_fn(|i| {
            let radius = pois_min[i].length();
            // Rotating a rigid shape preserves each point's distance
            // from the pivot.
            assert!(
                (pois_max[i].length() - radius).abs() < EPSILON,
                "box point {i} changed radius under rotation: {} vs {}",
                radius,
                pois_max[i].length()
            );
            Fan::new(
                radius,
                RadianInterval::new(angle_of_point(pois_min[i]), angle_of_point(pois_max[i])),
            )
        })
    }

    fn create_moving_studs(blocks: &[Brick; 2]) -> [MovingStud; NUMBER_OF_STUDS] {
        let studs_min = blocks[0].stud_positions();
        let studs_max = blocks[1].stud_positions();
        std::array::from_fn(|i| {
            let radius = studs_min[i].length();
            if radius < EPSILON {
                // The stud sits on the pivot and does not move.
                return MovingStud::full_circle();
            }
            assert!(
                (studs_max[i].length() - radius).abs() < EPSILON,
                "stud {i} changed radius under rotation: {} vs {}",
                radius,
                studs_max[i].length()
            );
            MovingStud::new(
                radius,
                RadianInterval::new(angle_of_point(studs_min[i]), angle_of_point(studs_max[i])),
            )
        })
    }

    /// Collision verdict against one already-placed brick, given in the
    /// rotation frame (world position minus `stud_translation`).
    pub fn intersects_brick(&self, brick: &Brick) -> bool {
        let level = self.blocks[0].level;
        if brick.level == level {
            // Same level: extremal boxes and the fans swept between them.
            self.blocks.iter().any(|block| block.boxes_intersect(brick))
                || self.fans.iter().any(|fan| fan.intersects_box(brick))
        } else if level + 1 == brick.level {
            // Brick sits on top: its underside meets the moving studs.
            self.moving_studs
                .iter()
                .any(|stud| stud.intersects_box(brick))
        } else if level - 1 == brick.level {
            // Brick sits underneath: its studs meet the turning boxes.
            brick.stud_positions().iter().any(|&stud| {
                self.blocks
                    .iter()
                    .any(|block| block.box_intersects_stud(stud))
                    || self.fans.iter().any(|fan| fan.intersects_stud(stud))
            })
        } else {
            false
        }
    }
}
