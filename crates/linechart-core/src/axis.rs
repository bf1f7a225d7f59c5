// File: crates/linechart-core/src/axis.rs
// Summary: Nice linear tick generation with pixel positions and labels.

use crate::scale::{nice_step, LinearScale};

/// Default tick count aimed for on each axis.
pub const TARGET_TICKS: usize = 10;

/// One labelled tick mark, positioned in pixel space.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub px: f32,
    pub label: String,
}

/// Nice tick values inside `[min, max]`: multiples of a 1/2/5 step chosen to
/// yield roughly `target` ticks. A degenerate domain gets its sole value.
pub fn tick_values(min: f64, max: f64, target: usize) -> Vec<f64> {
    if !(max > min) {
        return vec![min];
    }
    let step = nice_step((max - min) / target.max(1) as f64);
    let first = (min / step).ceil();
    let last = (max / step).floor();
    let mut out = Vec::new();
    let mut i = first;
    while i <= last + 0.5 {
        out.push(i * step);
        i += 1.0;
    }
    out
}

/// Build labelled ticks for a domain, positioned through `scale`.
pub fn ticks(min: f64, max: f64, target: usize, scale: &LinearScale) -> Vec<Tick> {
    let values = tick_values(min, max, target);
    let decimals = if max > min {
        step_decimals(nice_step((max - min) / target.max(1) as f64))
    } else {
        step_decimals(1.0)
    };
    values
        .into_iter()
        .map(|v| Tick {
            value: v,
            px: scale.to_px(v),
            label: format!("{v:.decimals$}"),
        })
        .collect()
}

/// Decimal places needed so consecutive labels of `step` stay distinct.
fn step_decimals(step: f64) -> usize {
    if step >= 1.0 {
        0
    } else {
        (-step.log10().floor()) as usize
    }
}
