//! TrueType/OpenType faces rasterized with fontdue.

use std::fmt;

use fontdue::{Font, FontSettings};

use super::{RenderError, TextMask};

/// A parsed font at a fixed pixel size.
#[derive(Clone)]
pub struct TrueTypeFace {
    font: Font,
    px: f32,
}

impl TrueTypeFace {
    /// Parse a font file. `collection_index` selects a face inside `.ttc` files.
    pub fn from_bytes(bytes: Vec<u8>, px: f32, collection_index: u32) -> Result<Self, String> {
        let settings = FontSettings {
            collection_index,
            ..FontSettings::default()
        };
        let font = Font::from_bytes(bytes, settings).map_err(|e| e.to_string())?;
        Ok(Self { font, px })
    }

    /// Ascent above and descent below the baseline, both as whole pixels.
    fn vertical_extent(&self) -> (u32, u32) {
        match self.font.horizontal_line_metrics(self.px) {
            Some(metrics) => (
                metrics.ascent.ceil().max(0.0) as u32,
                (-metrics.descent).ceil().max(0.0) as u32,
            ),
            None => (
                (self.px * 0.8).ceil() as u32,
                (self.px * 0.2).ceil() as u32,
            ),
        }
    }

    /// Whether `c` maps to a real glyph with visible coverage.
    pub fn check_glyph(&self, c: char) -> Result<(), RenderError> {
        if c.is_whitespace() {
            return Ok(());
        }
        if self.font.lookup_glyph_index(c) == 0 {
            return Err(RenderError::MissingGlyph(c));
        }
        // Color-bitmap faces (emoji) map the codepoint but carry no outline.
        let (_, coverage) = self.font.rasterize(c, self.px);
        if coverage.iter().all(|v| *v == 0) {
            return Err(RenderError::EmptyGlyph(c));
        }
        Ok(())
    }

    /// Lay out `text` on one line and rasterize it into a coverage mask.
    pub fn rasterize(&self, text: &str) -> TextMask {
        let (ascent, descent) = self.vertical_extent();

        let mut pen = 0.0f32;
        let mut previous: Option<char> = None;
        let mut placed = Vec::new();

        for c in text.chars() {
            if let Some(kern) = previous.and_then(|p| self.font.horizontal_kern(p, c, self.px)) {
                pen += kern;
            }
            let (metrics, coverage) = self.font.rasterize(c, self.px);
            let x = (pen + metrics.xmin as f32).round() as i32;
            // ymin is the bitmap's bottom edge relative to the baseline, y up.
            let y = ascent as i32 - metrics.height as i32 - metrics.ymin;
            placed.push((x, y, metrics.width, coverage));
            pen += metrics.advance_width;
            previous = Some(c);
        }

        let width = pen.ceil().max(0.0) as u32;
        let mut mask = TextMask::new(width, ascent + descent, ascent);
        for (x, y, glyph_width, coverage) in placed {
            if glyph_width == 0 {
                continue;
            }
            for (i, value) in coverage.iter().enumerate() {
                let gx = (i % glyph_width) as i32;
                let gy = (i / glyph_width) as i32;
                mask.put_clipped(x + gx, y + gy, *value);
            }
        }
        mask
    }
}

impl fmt::Debug for TrueTypeFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrueTypeFace")
            .field("px", &self.px)
            .field("glyphs", &self.font.glyph_count())
            .finish()
    }
}
