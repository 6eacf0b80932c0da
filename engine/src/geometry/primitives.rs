//! Planar Primitives
//!
//! Points, line segments and the circle-vs-segment predicate used by the
//! swept-path tests. All circles are centered at the origin of the
//! rotation frame; callers translate their geometry into that frame
//! first.

use glam::DVec2;

use crate::constants::EPSILON;
use crate::geometry::interval::RadianInterval;

/// A position in the plane.
pub type Point = DVec2;

/// Ordered pair of points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub from: Point,
    pub to: Point,
}

impl LineSegment {
    pub fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }
}

/// Normalizes an angle to [-PI, PI).
pub fn normalize_angle(mut a: f64) -> f64 {
    let two_pi = 2.0 * std::f64::consts::PI;
    while a < -std::f64::consts::PI {
        a += two_pi;
    }
    while a >= std::f64::consts::PI {
        a -= two_pi;
    }
    a
}

/// Angle of the ray from the origin through `p`.
pub fn angle_of_point(p: Point) -> f64 {
    p.y.atan2(p.x)
}

/// True if `b` is within the axis-aligned bounding box of `a` and `c`,
/// inflated by epsilon on every side.
pub fn between_segment_endpoints(a: Point, b: Point, c: Point) -> bool {
    between_epsilon(a.x, b.x, c.x) && between_epsilon(a.y, b.y, c.y)
}

fn between_epsilon(a: f64, b: f64, c: f64) -> bool {
    (a - EPSILON <= b && b <= c + EPSILON) || (a + EPSILON >= b && b >= c - EPSILON)
}

/// Intersections of the origin circle of radius `r` with the support
/// line of `segment`. Returns `None` when the line misses the circle;
/// a tangent line yields two equal points.
pub fn circle_line_intersections(r: f64, segment: &LineSegment) -> Option<(Point, Point)> {
    let d = segment.to - segment.from;
    let dr_sq = d.length_squared();
    let det = segment.from.x * segment.to.y - segment.to.x * segment.from.y;
    let discriminant = r * r * dr_sq - det * det;
    if discriminant < 0.0 {
        return None;
    }

    let root = discriminant.sqrt();
    let sign_dy = if d.y < 0.0 { -1.0 } else { 1.0 };
    let i1 = Point::new(
        (det * d.y + sign_dy * d.x * root) / dr_sq,
        (-det * d.x + d.y.abs() * root) / dr_sq,
    );
    let i2 = Point::new(
        (det * d.y - sign_dy * d.x * root) / dr_sq,
        (-det * d.x - d.y.abs() * root) / dr_sq,
    );
    Some((i1, i2))
}

/// True iff the arc of the origin circle of radius `r` restricted to
/// `interval` intersects `segment`. Each circle-line intersection point
/// must lie between the segment endpoints and at an angle inside the
/// interval.
pub fn circle_cutout_intersects_line_segment(
    r: f64,
    interval: &RadianInterval,
    segment: &LineSegment,
) -> bool {
    let Some((i1, i2)) = circle_line_intersections(r, segment) else {
        return false;
    };
    if between_segment_endpoints(segment.from, i1, segment.to)
        && interval.contains(angle_of_point(i1))
    {
        return true;
    }
    between_segment_endpoints(segment.from, i2, segment.to)
        && interval.contains(angle_of_point(i2))
}
