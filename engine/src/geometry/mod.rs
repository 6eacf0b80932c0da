//! Geometry utilities: wraparound angle intervals and planar primitives.

pub mod interval;
pub mod primitives;

pub use interval::{
    Interval, IntervalList, RadianInterval, angle_to_original_interval, collapse_intervals,
    interval_and, interval_contains, intervals_to_original_interval,
};
pub use primitives::{
    LineSegment, Point, angle_of_point, circle_cutout_intersects_line_segment,
    circle_line_intersections, normalize_angle,
};
