//! RGB color type and the predefined palette.

/// Represents a color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum). Shapes are
/// always painted opaque, so `a` stays at 1.0 for every color the UI produces;
/// it exists because Cairo sources are RGBA.
///
/// # Examples
///
/// ```
/// use paintbox::draw::Color;
/// let orange = Color::from_rgb8(255, 128, 0);
/// assert_eq!(orange.to_rgb8(), [255, 128, 0]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

impl Color {
    /// Creates an opaque color from floating-point components.
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Creates an opaque color from 8-bit components (as picked in a color dialog).
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0)
    }

    /// Returns the 8-bit RGB components, rounding to the nearest value.
    pub fn to_rgb8(&self) -> [u8; 3] {
        let channel = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [channel(self.r), channel(self.g), channel(self.b)]
    }

    /// Sets this color as the source of a Cairo context.
    pub(crate) fn apply(&self, ctx: &cairo::Context) {
        ctx.set_source_rgba(self.r, self.g, self.b, self.a);
    }
}

// ============================================================================
// Predefined Color Constants
// ============================================================================

/// Predefined red color (R=1.0, G=0.0, B=0.0)
pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);

/// Predefined green color (R=0.0, G=1.0, B=0.0)
pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);

/// Predefined blue color (R=0.0, G=0.0, B=1.0)
pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);

/// Predefined yellow color (R=1.0, G=1.0, B=0.0)
pub const YELLOW: Color = Color::rgb(1.0, 1.0, 0.0);

/// Predefined orange color (R=1.0, G=0.5, B=0.0)
pub const ORANGE: Color = Color::rgb(1.0, 0.5, 0.0);

/// Predefined pink/magenta color (R=1.0, G=0.0, B=1.0)
pub const PINK: Color = Color::rgb(1.0, 0.0, 1.0);

/// Predefined white color, also the canvas background
pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);

/// Predefined black color, the default pen color
pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
