// File: crates/linechart-core/src/domain.rs
// Summary: Axis domain computation from sample extents.

use crate::series::{Sample, YValue};

/// X domain: min/max over every sample's `x`, missing values included.
/// `None` only for an empty slice.
pub fn x_extent(samples: &[Sample]) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for s in samples {
        min = min.min(s.x);
        max = max.max(s.x);
    }
    if min.is_finite() && max.is_finite() {
        Some((min, max))
    } else {
        None
    }
}

/// Y domain for a scalar series: min/max over present values, or `[0, 1]`
/// when nothing is present.
pub fn scalar_y_domain(samples: &[Sample]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut any = false;
    for s in samples {
        if let YValue::Scalar(v) = s.y {
            min = min.min(v);
            max = max.max(v);
            any = true;
        }
    }
    if any { (min, max) } else { (0.0, 1.0) }
}

/// Y domain for a vector series: min/max over the flattened pool of present
/// slot values across all sub-series. The bounds default independently
/// (min to 0, max to 1) when the pool is empty.
pub fn vector_y_domain(samples: &[Sample]) -> (f64, f64) {
    let mut min: Option<f64> = None;
    let mut max: Option<f64> = None;
    for s in samples {
        if let YValue::Vector(slots) = &s.y {
            for v in slots.iter().flatten() {
                min = Some(min.map_or(*v, |m| m.min(*v)));
                max = Some(max.map_or(*v, |m| m.max(*v)));
            }
        }
    }
    (min.unwrap_or(0.0), max.unwrap_or(1.0))
}
