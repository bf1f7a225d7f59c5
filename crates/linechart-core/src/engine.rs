// File: crates/linechart-core/src/engine.rs
// Summary: Chart engine: shape dispatch, domain/scale computation, gap-aware path generation.

use thiserror::Error;

use crate::axis::{ticks, Tick, TARGET_TICKS};
use crate::domain::{scalar_y_domain, vector_y_domain, x_extent};
use crate::geometry::{PointPx, SubSeriesPaths};
use crate::palette::Palette;
use crate::scale::{nice_bounds, LinearScale};
use crate::series::{detect_shape, Sample, Series, SeriesShape};
use crate::types::{Insets, HEIGHT, WIDTH};

/// Why a series could not be planned.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ChartError {
    /// Empty input, or every sample's value is missing.
    #[error("no valid data points to render a chart")]
    NoValidData,
    /// A sample's value disagrees with the shape established by the first
    /// present value (scalar vs vector, or a different vector width).
    #[error("sample {index} has shape {found:?}, expected {expected:?}")]
    ShapeMismatch {
        index: usize,
        expected: SeriesShape,
        found: SeriesShape,
    },
}

/// Engine configuration: surface size, plot margins, stroke palette.
#[derive(Clone, Debug)]
pub struct ChartOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub palette: Palette,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            palette: Palette::default(),
        }
    }
}

/// Everything a renderer needs to draw one chart: surface layout, axis
/// domains and ticks, and per-sub-series path segments in pixel space
/// (relative to the inner plot origin at `(insets.left, insets.top)`).
#[derive(Clone, Debug, PartialEq)]
pub struct RenderPlan {
    pub title: String,
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub x_domain: (f64, f64),
    pub y_domain: (f64, f64),
    pub x_ticks: Vec<Tick>,
    pub y_ticks: Vec<Tick>,
    pub sub_series: Vec<SubSeriesPaths>,
}

impl RenderPlan {
    /// Width of the inner plot area in pixels.
    pub fn inner_width(&self) -> f32 {
        (self.width - self.insets.hsum() as i32).max(1) as f32
    }

    /// Height of the inner plot area in pixels.
    pub fn inner_height(&self) -> f32 {
        (self.height - self.insets.vsum() as i32).max(1) as f32
    }
}

/// Stateless planner turning `(title, samples)` into a `RenderPlan`.
/// Pure and deterministic: no side effects, no cross-call state.
#[derive(Clone, Debug, Default)]
pub struct ChartEngine {
    opts: ChartOptions,
}

impl ChartEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(opts: ChartOptions) -> Self {
        Self { opts }
    }

    pub fn options(&self) -> &ChartOptions {
        &self.opts
    }

    /// Plan a whole series bundle.
    pub fn render_series(&self, series: &Series) -> Result<RenderPlan, ChartError> {
        self.render(&series.title, &series.samples)
    }

    /// Plan one chart.
    ///
    /// Establishes the series shape from the first present value, rejects
    /// inputs with no present value at all, validates that every later value
    /// agrees with that shape, then computes domains, niced Y scale, ticks
    /// and per-sub-series path segments. Missing values split segments; no
    /// vertex bridges a gap.
    pub fn render(&self, title: &str, samples: &[Sample]) -> Result<RenderPlan, ChartError> {
        let (_, shape) = detect_shape(samples).ok_or(ChartError::NoValidData)?;
        for (index, s) in samples.iter().enumerate() {
            if let Some(found) = s.y.shape() {
                if found != shape {
                    return Err(ChartError::ShapeMismatch { index, expected: shape, found });
                }
            }
        }

        // Non-empty by the shape check above; only all-NaN x can fail here.
        let (x_min, x_max) = x_extent(samples).ok_or(ChartError::NoValidData)?;

        let inner_w = (self.opts.width - self.opts.insets.hsum() as i32).max(1) as f32;
        let inner_h = (self.opts.height - self.opts.insets.vsum() as i32).max(1) as f32;

        let x_scale = LinearScale::new(x_min, x_max, 0.0, inner_w);

        let (raw_min, raw_max) = match shape {
            SeriesShape::Scalar => scalar_y_domain(samples),
            SeriesShape::Vector(_) => vector_y_domain(samples),
        };
        let (y_min, y_max) = nice_bounds(raw_min, raw_max, TARGET_TICKS);
        // Screen-space Y: larger values map to smaller pixel coordinates.
        let y_scale = LinearScale::new(y_min, y_max, inner_h, 0.0);

        let x_ticks = ticks(x_min, x_max, TARGET_TICKS, &x_scale);
        let y_ticks = ticks(y_min, y_max, TARGET_TICKS, &y_scale);

        let palette_len = self.opts.palette.len();
        let mut sub_series = Vec::with_capacity(shape.sub_series());
        for i in 0..shape.sub_series() {
            let mut segments: Vec<Vec<PointPx>> = Vec::new();
            let mut current: Vec<PointPx> = Vec::new();
            for s in samples {
                match s.y.at(i) {
                    Some(v) => {
                        current.push(PointPx::new(x_scale.to_px(s.x), y_scale.to_px(v)));
                    }
                    None => {
                        if !current.is_empty() {
                            segments.push(std::mem::take(&mut current));
                        }
                    }
                }
            }
            if !current.is_empty() {
                segments.push(current);
            }
            sub_series.push(SubSeriesPaths { color_index: i % palette_len, segments });
        }

        Ok(RenderPlan {
            title: title.to_string(),
            width: self.opts.width,
            height: self.opts.height,
            insets: self.opts.insets,
            x_domain: (x_min, x_max),
            y_domain: (y_min, y_max),
            x_ticks,
            y_ticks,
            sub_series,
        })
    }
}
