// File: crates/linechart-core/src/lib.rs
// Summary: Core library entry point; exports the geometry engine API.

pub mod axis;
pub mod domain;
pub mod engine;
pub mod geometry;
pub mod palette;
pub mod scale;
pub mod series;
pub mod types;

pub use axis::Tick;
pub use engine::{ChartEngine, ChartError, ChartOptions, RenderPlan};
pub use geometry::{PointPx, SubSeriesPaths};
pub use palette::{Color, Palette};
pub use scale::LinearScale;
pub use series::{Sample, Series, SeriesShape, YValue};
pub use types::Insets;
