// File: crates/linechart-core/src/series.rs
// Summary: Series model for scalar and vector-valued samples with missing values.
// Notes:
// - The value shape (scalar vs vector, and vector width) is a per-series
//   invariant decided by the first sample with a present value. Helpers here
//   only describe shapes; the engine enforces consistency when planning.

/// One sampled value: absent, a single number, or one slot per sub-series.
#[derive(Clone, Debug, PartialEq)]
pub enum YValue {
    Missing,
    Scalar(f64),
    Vector(Vec<Option<f64>>),
}

impl YValue {
    pub fn scalar(v: f64) -> Self {
        Self::Scalar(v)
    }

    pub fn vector(slots: impl Into<Vec<Option<f64>>>) -> Self {
        Self::Vector(slots.into())
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// Shape of a present value; `None` for `Missing`.
    pub fn shape(&self) -> Option<SeriesShape> {
        match self {
            Self::Missing => None,
            Self::Scalar(_) => Some(SeriesShape::Scalar),
            Self::Vector(slots) => Some(SeriesShape::Vector(slots.len())),
        }
    }

    /// Value of sub-series `i`, if present. A scalar answers only for `i == 0`.
    pub fn at(&self, i: usize) -> Option<f64> {
        match self {
            Self::Missing => None,
            Self::Scalar(v) => (i == 0).then_some(*v),
            Self::Vector(slots) => slots.get(i).copied().flatten(),
        }
    }
}

impl From<f64> for YValue {
    fn from(v: f64) -> Self {
        Self::Scalar(v)
    }
}

impl From<Vec<Option<f64>>> for YValue {
    fn from(slots: Vec<Option<f64>>) -> Self {
        Self::Vector(slots)
    }
}

/// One `(x, y)` data point. Samples are expected pre-sorted by `x`.
#[derive(Clone, Debug, PartialEq)]
pub struct Sample {
    pub x: f64,
    pub y: YValue,
}

impl Sample {
    pub fn new(x: f64, y: impl Into<YValue>) -> Self {
        Self { x, y: y.into() }
    }

    /// A sample whose value is absent; its `x` still counts for the X domain.
    pub fn missing(x: f64) -> Self {
        Self { x, y: YValue::Missing }
    }
}

/// Shape of a series: one line, or `k` lines drawn from vector slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesShape {
    Scalar,
    Vector(usize),
}

impl SeriesShape {
    /// Number of independent polylines this shape produces.
    pub fn sub_series(&self) -> usize {
        match self {
            Self::Scalar => 1,
            Self::Vector(k) => *k,
        }
    }
}

/// Find the first sample with a present value and report its index and shape.
/// `None` when every sample is missing (or the slice is empty).
pub fn detect_shape(samples: &[Sample]) -> Option<(usize, SeriesShape)> {
    samples
        .iter()
        .enumerate()
        .find_map(|(i, s)| s.y.shape().map(|shape| (i, shape)))
}

/// A named, ordered sequence of samples to be drawn as one chart.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub title: String,
    pub samples: Vec<Sample>,
}

impl Series {
    pub fn new(title: impl Into<String>, samples: Vec<Sample>) -> Self {
        Self { title: title.into(), samples }
    }
}
