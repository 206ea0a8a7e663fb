//! Opaque RGB pixel buffer that every drawing operation mutates in place.

use crate::color::Color;

/// A 2D RGB canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel data (RGB, row-major).
    data: Vec<[u8; 3]>,
}

impl Canvas {
    /// Create a new canvas filled with a color. Alpha of `fill` is ignored.
    pub fn new(width: u32, height: u32, fill: Color) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            data: vec![fill.to_rgb8(); size],
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get a pixel at the given coordinates.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> [u8; 3] {
        self.data[self.index(x, y)]
    }

    /// Set a pixel at the given coordinates.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, rgb: [u8; 3]) {
        let idx = self.index(x, y);
        self.data[idx] = rgb;
    }

    /// Whether signed coordinates fall inside the canvas.
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    /// Overwrite an entire scanline with one color.
    pub fn fill_row(&mut self, y: u32, color: Color) {
        let start = self.index(0, y);
        let end = start + self.width as usize;
        self.data[start..end].fill(color.to_rgb8());
    }

    /// Alpha-composite `color` at signed coordinates; out-of-bounds is clipped.
    #[inline]
    pub fn blend(&mut self, x: i32, y: i32, color: Color, coverage: u8) {
        if !self.contains(x, y) {
            return;
        }
        let idx = self.index(x as u32, y as u32);
        self.data[idx] = color.blend_over(self.data[idx], coverage);
    }

    /// Borrow one scanline.
    pub fn row(&self, y: u32) -> &[[u8; 3]] {
        let start = self.index(0, y);
        &self.data[start..start + self.width as usize]
    }

    /// Convert to packed 8-bit RGB bytes.
    pub fn to_rgb8(&self) -> Vec<u8> {
        self.data.iter().flatten().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_fills() {
        let canvas = Canvas::new(4, 3, Color::rgb(1, 2, 3));
        assert_eq!(canvas.get(3, 2), [1, 2, 3]);
        assert_eq!(canvas.to_rgb8().len(), 4 * 3 * 3);
    }

    #[test]
    fn test_fill_row_only_touches_row() {
        let mut canvas = Canvas::new(4, 3, Color::black());
        canvas.fill_row(1, Color::white());
        assert!(canvas.row(1).iter().all(|p| *p == [255, 255, 255]));
        assert!(canvas.row(0).iter().all(|p| *p == [0, 0, 0]));
        assert!(canvas.row(2).iter().all(|p| *p == [0, 0, 0]));
    }

    #[test]
    fn test_blend_clips() {
        let mut canvas = Canvas::new(2, 2, Color::black());
        canvas.blend(-1, 0, Color::white(), 255);
        canvas.blend(0, 2, Color::white(), 255);
        canvas.blend(1, 1, Color::white(), 255);
        assert_eq!(canvas.get(0, 0), [0, 0, 0]);
        assert_eq!(canvas.get(1, 1), [255, 255, 255]);
    }
}
