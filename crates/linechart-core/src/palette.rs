// File: crates/linechart-core/src/palette.rs
// Summary: Explicit ordered color palette for sub-series strokes.

/// Opaque RGB stroke color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS hex form, e.g. `#3B82F6`.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Ordered list of stroke colors; sub-series `i` draws with color `i mod len`.
/// Always non-empty: an empty list falls back to the default palette.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    pub fn new(colors: Vec<Color>) -> Self {
        if colors.is_empty() {
            return Self::default();
        }
        Self { colors }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Color for sub-series `index`, cycling past the end of the list.
    pub fn color(&self, index: usize) -> Color {
        self.colors[index % self.colors.len()]
    }
}

impl Default for Palette {
    /// Blue, green, red.
    fn default() -> Self {
        Self {
            colors: vec![
                Color::rgb(0x3B, 0x82, 0xF6),
                Color::rgb(0x22, 0xC5, 0x5E),
                Color::rgb(0xEF, 0x44, 0x44),
            ],
        }
    }
}
