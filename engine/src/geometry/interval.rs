//! Angle Interval Arithmetic
//!
//! Wraparound-aware intervals of angles in (-PI, PI] and sorted lists of
//! plain intervals. A `RadianInterval` whose `max` is below its `min`
//! wraps through the PI/-PI seam; membership then means "at least `min`
//! or at most `max`".
//!
//! The seam re-mapping (`angle_to_original_interval`) re-expresses an
//! angle measured inside a swept interval on the canonical rotation
//! scale `[-MAX_ANGLE_RADIANS, +MAX_ANGLE_RADIANS]`. This is the
//! trickiest unit of the crate; keep the exhaustive tests below green
//! before touching anything that builds on it.

use crate::constants::{EPSILON, MAX_ANGLE_RADIANS};

/// A plain (start, end) angle pair, start <= end.
pub type Interval = (f64, f64);

/// Sorted list of non-overlapping, non-touching intervals.
pub type IntervalList = Vec<Interval>;

/// An angle interval on the circle, counter-clockwise from `min` to
/// `max`, both in (-PI, PI]. Wraps through the seam when `max < min`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadianInterval {
    pub min: f64,
    pub max: f64,
}

impl RadianInterval {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Full circle, used for degenerate sweeps with no meaningful angle.
    pub fn full_circle() -> Self {
        Self {
            min: -std::f64::consts::PI,
            max: std::f64::consts::PI,
        }
    }

    /// True if the interval passes through the PI/-PI seam.
    pub fn wraps(&self) -> bool {
        self.max < self.min
    }

    /// Wraparound-aware membership test.
    pub fn contains(&self, a: f64) -> bool {
        debug_assert!(a >= -std::f64::consts::PI - EPSILON);
        debug_assert!(a <= std::f64::consts::PI + EPSILON);
        if self.wraps() {
            a >= self.min || a <= self.max
        } else {
            self.min <= a && a <= self.max
        }
    }

    /// Splits into one or two plain intervals, cut at the seam.
    pub fn to_interval_list(&self) -> IntervalList {
        let pi = std::f64::consts::PI;
        if self.wraps() {
            vec![(-pi, self.max), (self.min, pi)]
        } else {
            vec![(self.min, self.max)]
        }
    }

    /// Angular length of the interval, accounting for the seam.
    pub fn span(&self) -> f64 {
        if self.wraps() {
            2.0 * std::f64::consts::PI + self.max - self.min
        } else {
            self.max - self.min
        }
    }
}

/// Re-expresses an angle `a`, measured inside `interval`, on the
/// canonical rotation scale `[-MAX_ANGLE_RADIANS, +MAX_ANGLE_RADIANS]`.
///
/// `interval.min` maps to `-MAX_ANGLE_RADIANS` and `interval.max` to
/// `+MAX_ANGLE_RADIANS`. For a wrapping interval the two arcs on either
/// side of the seam share the full wrapped span as denominator, so the
/// mapping stays continuous and monotone across the jump.
pub fn angle_to_original_interval(a: f64, interval: &RadianInterval) -> f64 {
    let min = interval.min;
    let max = interval.max;
    if interval.wraps() {
        // Two arcs: [min, PI] before the seam and [-PI, max] after it.
        let span = 2.0 * std::f64::consts::PI + max - min;
        if a <= max {
            MAX_ANGLE_RADIANS - 2.0 * MAX_ANGLE_RADIANS * (max - a) / span
        } else {
            -MAX_ANGLE_RADIANS + 2.0 * MAX_ANGLE_RADIANS * (a - min) / span
        }
    } else {
        -MAX_ANGLE_RADIANS + 2.0 * MAX_ANGLE_RADIANS * (a - min) / (max - min)
    }
}

/// Maps every endpoint in `list` through [`angle_to_original_interval`],
/// sorts the resulting pairs and collapses touching neighbours.
pub fn intervals_to_original_interval(
    list: &IntervalList,
    interval: &RadianInterval,
) -> IntervalList {
    let mut mapped: IntervalList = list
        .iter()
        .map(|&(start, end)| {
            (
                angle_to_original_interval(start, interval),
                angle_to_original_interval(end, interval),
            )
        })
        .collect();
    mapped.sort_by(|a, b| a.partial_cmp(b).expect("interval endpoints are finite"));
    collapse_intervals(&mapped)
}

/// Merges overlapping or epsilon-touching neighbours of a sorted list.
/// Idempotent: collapsing a collapsed list is a no-op.
pub fn collapse_intervals(list: &IntervalList) -> IntervalList {
    let mut result = IntervalList::new();
    let mut iter = list.iter();
    let Some(&first) = iter.next() else {
        return result;
    };
    let mut prev = first;
    for &(start, end) in iter {
        if start <= prev.1 + EPSILON {
            prev.1 = prev.1.max(end);
        } else {
            result.push(prev);
            prev = (start, end);
        }
    }
    result.push(prev);
    result
}

/// Intersection of two sorted interval lists.
pub fn interval_and(a: &IntervalList, b: &IntervalList) -> IntervalList {
    let mut result = IntervalList::new();
    let mut ia = a.iter().peekable();
    let mut ib = b.iter().peekable();
    while let (Some(&&(a1, a2)), Some(&&(b1, b2))) = (ia.peek(), ib.peek()) {
        if b2 < a1 {
            ib.next();
            continue;
        }
        if a2 < b1 {
            ia.next();
            continue;
        }
        // Both overlap past the later start; emit up to the earlier end.
        let start = a1.max(b1);
        if a2 < b2 {
            result.push((start, a2));
            ia.next();
        } else {
            result.push((start, b2));
            ib.next();
        }
    }
    result
}

/// Membership of a single angle in a sorted interval list.
pub fn interval_contains(list: &IntervalList, a: f64) -> bool {
    for &(start, end) in list {
        if end < a {
            continue;
        }
        return start <= a;
    }
    false
}
