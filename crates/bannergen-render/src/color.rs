//! Color utilities for banner compositing.

use serde::{Deserialize, Serialize};

/// RGBA color with 8-bit channels.
///
/// Alpha 255 is opaque. The canvas itself is opaque RGB, so alpha only
/// matters while compositing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "ColorRepr", into = "ColorRepr")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a color with alpha.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create black.
    pub const fn black() -> Self {
        Self::rgb(0, 0, 0)
    }

    /// Create white.
    pub const fn white() -> Self {
        Self::rgb(255, 255, 255)
    }

    /// Same color with a different alpha.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Convert to 8-bit RGB, dropping alpha.
    pub const fn to_rgb8(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Linearly interpolate toward `other`, truncating each channel toward zero.
    ///
    /// `t` is clamped to [0, 1]. Channels are truncated, never rounded.
    pub fn lerp_truncated(&self, other: &Color, t: f64) -> Color {
        let t = t.clamp(0.0, 1.0);
        let channel = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t) as u8;
        Color {
            r: channel(self.r, other.r),
            g: channel(self.g, other.g),
            b: channel(self.b, other.b),
            a: channel(self.a, other.a),
        }
    }

    /// Composite this color over an opaque destination pixel.
    ///
    /// `coverage` scales the color's own alpha (255 = full coverage).
    pub fn blend_over(&self, dst: [u8; 3], coverage: u8) -> [u8; 3] {
        let alpha = (self.a as u32 * coverage as u32 + 127) / 255;
        match alpha {
            0 => dst,
            255 => self.to_rgb8(),
            _ => {
                let mix = |src: u8, dst: u8| {
                    ((src as u32 * alpha + dst as u32 * (255 - alpha) + 127) / 255) as u8
                };
                [mix(self.r, dst[0]), mix(self.g, dst[1]), mix(self.b, dst[2])]
            }
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

/// On-disk form: `[r, g, b]` or `[r, g, b, a]`.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum ColorRepr {
    Rgb([u8; 3]),
    Rgba([u8; 4]),
}

impl From<ColorRepr> for Color {
    fn from(repr: ColorRepr) -> Self {
        match repr {
            ColorRepr::Rgb([r, g, b]) => Color::rgb(r, g, b),
            ColorRepr::Rgba([r, g, b, a]) => Color::rgba(r, g, b, a),
        }
    }
}

impl From<Color> for ColorRepr {
    fn from(color: Color) -> Self {
        if color.a == 255 {
            ColorRepr::Rgb(color.to_rgb8())
        } else {
            ColorRepr::Rgba([color.r, color.g, color.b, color.a])
        }
    }
}
