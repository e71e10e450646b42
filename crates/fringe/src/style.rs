//! Stroke styles handed to the renderer alongside curves and circles.

/// 8-bit sRGB colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const MAGENTA: Color = Color::rgb(255, 0, 255);
    pub const CYAN: Color = Color::rgb(0, 255, 255);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
    /// `#rrggbb`
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Line pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Dash {
    #[default]
    Solid,
    Dashed,
}

/// Colour, width (in output pixels) and pattern of a stroke.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Style {
    pub color: Color,
    pub width: f64,
    pub dash: Dash,
}

impl Style {
    #[inline]
    pub const fn solid(color: Color, width: f64) -> Self {
        Self {
            color,
            width,
            dash: Dash::Solid,
        }
    }
    #[inline]
    pub const fn dashed(color: Color, width: f64) -> Self {
        Self {
            color,
            width,
            dash: Dash::Dashed,
        }
    }

    /// Antinode overlay: magenta, 1.2.
    pub const ANTINODE: Style = Style::solid(Color::MAGENTA, 1.2);
    /// Nodal overlay: cyan, 1.2.
    pub const NODAL: Style = Style::solid(Color::CYAN, 1.2);
    /// Wavefront crest: white solid, 0.6.
    pub const CREST: Style = Style::solid(Color::WHITE, 0.6);
    /// Wavefront trough: white dashed, 0.6.
    pub const TROUGH: Style = Style::dashed(Color::WHITE, 0.6);
}
