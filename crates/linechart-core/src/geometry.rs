// File: crates/linechart-core/src/geometry.rs
// Summary: Pixel-space path geometry produced by the engine.

/// One vertex in pixel coordinates, relative to the inner plot origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointPx {
    pub x: f32,
    pub y: f32,
}

impl PointPx {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// All polyline geometry for one sub-series: a stroke color index into the
/// palette and the unbroken vertex runs, in sample order. A missing value
/// ends a run; runs with a single vertex are kept (isolated points).
#[derive(Clone, Debug, PartialEq)]
pub struct SubSeriesPaths {
    pub color_index: usize,
    pub segments: Vec<Vec<PointPx>>,
}
