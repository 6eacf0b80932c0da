//! Interval Tests - Seam Re-Mapping and List Arithmetic
//!
//! Exercises the wraparound interval machinery through the public API:
//! the canonical-scale re-mapping must stay monotone and continuous
//! across the PI/-PI seam, and list operations must keep their sorted
//! non-overlapping invariant.

use brick_counting_core::constants::MAX_ANGLE_RADIANS;
use brick_counting_core::geometry::{
    RadianInterval, angle_to_original_interval, collapse_intervals, interval_and,
    interval_contains, intervals_to_original_interval, normalize_angle,
};
use std::f64::consts::PI;

// ============================================================================
// Canonical-Scale Re-Mapping
// ============================================================================

/// Walks the interval domain counter-clockwise in `steps` samples.
fn domain_walk(interval: &RadianInterval, steps: usize) -> Vec<f64> {
    (0..=steps)
        .map(|i| {
            let a = interval.min + interval.span() * i as f64 / steps as f64;
            if a > PI { a - 2.0 * PI } else { a }
        })
        .collect()
}

#[test]
fn test_mapping_is_monotone_over_non_wrapping_domain() {
    let interval = RadianInterval::new(-1.2, 0.8);
    let mut prev = f64::NEG_INFINITY;
    for a in domain_walk(&interval, 100) {
        let mapped = angle_to_original_interval(a, &interval);
        assert!(mapped >= prev - 1e-9, "decreased at a={a}: {mapped} < {prev}");
        assert!(mapped >= -MAX_ANGLE_RADIANS - 1e-9);
        assert!(mapped <= MAX_ANGLE_RADIANS + 1e-9);
        prev = mapped;
    }
}

#[test]
fn test_mapping_is_monotone_over_wrapping_domain() {
    let interval = RadianInterval::new(2.2, -2.6);
    assert!(interval.wraps());
    let mut prev = f64::NEG_INFINITY;
    for a in domain_walk(&interval, 100) {
        let mapped = angle_to_original_interval(a, &interval);
        assert!(mapped >= prev - 1e-9, "decreased at a={a}: {mapped} < {prev}");
        prev = mapped;
    }
}

#[test]
fn test_mapping_endpoints_reach_the_rotation_limits() {
    for interval in [
        RadianInterval::new(-0.4, 1.1),
        RadianInterval::new(2.2, -2.6),
        RadianInterval::new(3.0, -3.0),
    ] {
        let lo = angle_to_original_interval(interval.min, &interval);
        let hi = angle_to_original_interval(interval.max, &interval);
        assert!((lo + MAX_ANGLE_RADIANS).abs() < 1e-9, "min of {interval:?} mapped to {lo}");
        assert!((hi - MAX_ANGLE_RADIANS).abs() < 1e-9, "max of {interval:?} mapped to {hi}");
    }
}

#[test]
fn test_mapping_is_continuous_at_the_seam() {
    let interval = RadianInterval::new(2.2, -2.6);
    let before = angle_to_original_interval(normalize_angle(PI - 1e-9), &interval);
    let after = angle_to_original_interval(-PI + 1e-9, &interval);
    assert!(
        (before - after).abs() < 1e-6,
        "seam jump: {before} vs {after}"
    );
}

#[test]
fn test_list_mapping_output_is_sorted_and_disjoint() {
    let interval = RadianInterval::new(2.2, -2.6);
    // Pieces given in circle order: both sides of the seam.
    let list = vec![(2.4, 2.9), (3.0, PI), (-PI, -2.8)];
    let mapped = intervals_to_original_interval(&list, &interval);
    assert!(!mapped.is_empty());
    for window in mapped.windows(2) {
        assert!(
            window[0].1 < window[1].0,
            "entries overlap or touch: {window:?}"
        );
    }
    for &(start, end) in &mapped {
        assert!(start <= end);
    }
    // The two seam-adjacent pieces are one contiguous arc: they must
    // have merged on the canonical scale.
    assert_eq!(mapped.len(), 2);
}

// ============================================================================
// List Arithmetic
// ============================================================================

#[test]
fn test_collapse_is_idempotent_on_mapped_output() {
    let interval = RadianInterval::new(-2.0, 2.0);
    let list = vec![(-2.0, -1.0), (-1.0, 0.5), (1.0, 1.5)];
    let mapped = intervals_to_original_interval(&list, &interval);
    assert_eq!(collapse_intervals(&mapped), mapped);
}

#[test]
fn test_interval_and_respects_bounds() {
    let a = vec![(-0.6, -0.2), (0.0, 0.3), (0.5, 0.6)];
    let b = vec![(-0.3, 0.55)];
    let result = interval_and(&a, &b);
    assert_eq!(result, vec![(-0.3, -0.2), (0.0, 0.3), (0.5, 0.55)]);
    for &(start, end) in &result {
        assert!(interval_contains(&a, start) && interval_contains(&b, start));
        assert!(interval_contains(&a, end) && interval_contains(&b, end));
    }
}

#[test]
fn test_interval_and_with_empty_is_empty() {
    let a = vec![(-0.6, 0.6)];
    assert!(interval_and(&a, &Vec::new()).is_empty());
    assert!(interval_and(&Vec::new(), &a).is_empty());
}
