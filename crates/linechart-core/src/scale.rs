// File: crates/linechart-core/src/scale.rs
// Summary: Linear data-to-pixel scale and 1/2/5 domain nicing.

/// Monotonic linear mapping from a data domain to a pixel range.
/// The range may be inverted (`r0 > r1`) for screen-space Y.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub d0: f64,
    pub d1: f64,
    pub r0: f32,
    pub r1: f32,
}

impl LinearScale {
    pub fn new(d0: f64, d1: f64, r0: f32, r1: f32) -> Self {
        Self { d0, d1, r0, r1 }
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let span = (self.d1 - self.d0).max(1e-12);
        self.r0 + ((v - self.d0) / span) as f32 * (self.r1 - self.r0)
    }
}

/// Round a raw step up to the nearest 1, 2 or 5 times a power of ten.
pub fn nice_step(rough: f64) -> f64 {
    let exponent = rough.abs().log10().floor();
    let magnitude = 10f64.powf(exponent);
    let fraction = rough / magnitude;
    let nice = if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Expand `[min, max]` outward to multiples of a nice step so tick labels
/// land on round values. A degenerate domain is widened upward by 1.0
/// before nicing so the scale keeps a usable span.
pub fn nice_bounds(min: f64, max: f64, target_ticks: usize) -> (f64, f64) {
    let (min, max) = if max > min { (min, max) } else { (min, min + 1.0) };
    let step = nice_step((max - min) / target_ticks.max(1) as f64);
    let lo = (min / step).floor() * step;
    let hi = (max / step).ceil() * step;
    (lo, hi)
}
