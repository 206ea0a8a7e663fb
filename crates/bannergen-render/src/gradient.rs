//! Vertical gradient background.

use serde::{Deserialize, Serialize};

use crate::canvas::Canvas;
use crate::color::Color;

/// Top-to-bottom linear gradient between two colors.
///
/// Evaluated once per scanline: row `y` gets `start + (end - start) * y / height`,
/// truncated per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerticalGradient {
    pub start: Color,
    pub end: Color,
}

impl VerticalGradient {
    pub const fn new(start: Color, end: Color) -> Self {
        Self { start, end }
    }

    /// Color of scanline `y` on a canvas `height` rows tall.
    pub fn color_at(&self, y: u32, height: u32) -> Color {
        if height == 0 {
            return self.start;
        }
        let ratio = y as f64 / height as f64;
        self.start.lerp_truncated(&self.end, ratio).with_alpha(255)
    }

    /// Fill every row of the canvas.
    pub fn paint(&self, canvas: &mut Canvas) {
        for y in 0..canvas.height {
            canvas.fill_row(y, self.color_at(y, canvas.height));
        }
    }
}
