//! Typefaces, text rasterization, and font resolution.
//!
//! A [`Face`] is either a TrueType font loaded from disk or the compiled-in
//! bitmap face. Faces rasterize a string into a [`TextMask`], a single-line
//! coverage bitmap that [`crate::text`] composites onto the canvas.

mod builtin;
mod resolve;
mod truetype;

pub use builtin::BuiltinFace;
pub use resolve::{
    resolve_fonts, resolve_single, FontChain, FontLoadError, FontLoader, FontRole, FontSource,
    FontSpec, FontTier, FsFontLoader, ResolvedFonts,
};
pub use truetype::TrueTypeFace;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from strict text rendering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// The face has no glyph for this character.
    #[error("no glyph for {0:?}")]
    MissingGlyph(char),

    /// The glyph exists but rasterizes to nothing (e.g. color-bitmap emoji).
    #[error("glyph for {0:?} has no coverage")]
    EmptyGlyph(char),

    /// The text is empty or whitespace only.
    #[error("text has no visible glyphs")]
    Blank,
}

/// A resolved typeface, read-only after resolution.
#[derive(Debug, Clone)]
pub enum Face {
    TrueType(TrueTypeFace),
    Builtin(BuiltinFace),
}

impl Face {
    /// The built-in face at its default scale.
    pub fn builtin() -> Self {
        Face::Builtin(BuiltinFace::default())
    }

    /// The built-in face standing in for a font requested at `px` pixels.
    pub fn builtin_for(px: f32) -> Self {
        Face::Builtin(BuiltinFace::for_px(px))
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, Face::Builtin(_))
    }

    /// Rasterize `text`, drawing whatever the face provides for each character.
    pub fn rasterize(&self, text: &str) -> TextMask {
        match self {
            Face::TrueType(face) => face.rasterize(text),
            Face::Builtin(face) => face.rasterize(text),
        }
    }

    /// Rasterize `text`, failing if any character cannot be shaped or the
    /// result has no visible pixels.
    pub fn rasterize_strict(&self, text: &str) -> Result<TextMask, RenderError> {
        for c in text.chars() {
            match self {
                Face::TrueType(face) => face.check_glyph(c)?,
                Face::Builtin(face) => face.check_glyph(c)?,
            }
        }
        let mask = self.rasterize(text);
        if mask.is_blank() {
            return Err(RenderError::Blank);
        }
        Ok(mask)
    }
}

impl From<BuiltinFace> for Face {
    fn from(face: BuiltinFace) -> Self {
        Face::Builtin(face)
    }
}

impl From<TrueTypeFace> for Face {
    fn from(face: TrueTypeFace) -> Self {
        Face::TrueType(face)
    }
}

/// Single-line coverage bitmap produced by a face.
///
/// `baseline` is the distance from the top row to the baseline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextMask {
    pub width: u32,
    pub height: u32,
    pub baseline: u32,
    coverage: Vec<u8>,
}

impl TextMask {
    pub fn new(width: u32, height: u32, baseline: u32) -> Self {
        Self {
            width,
            height,
            baseline,
            coverage: vec![0; width as usize * height as usize],
        }
    }

    #[inline]
    pub fn get(&self, x: u32, y: u32) -> u8 {
        self.coverage[y as usize * self.width as usize + x as usize]
    }

    /// Merge coverage at a pixel, keeping the maximum.
    #[inline]
    pub fn put(&mut self, x: u32, y: u32, value: u8) {
        let idx = y as usize * self.width as usize + x as usize;
        self.coverage[idx] = self.coverage[idx].max(value);
    }

    /// Like [`TextMask::put`], ignoring coordinates outside the mask.
    pub fn put_clipped(&mut self, x: i32, y: i32, value: u8) {
        if x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height {
            self.put(x as u32, y as u32, value);
        }
    }

    pub fn is_blank(&self) -> bool {
        self.coverage.iter().all(|v| *v == 0)
    }
}

/// Which point of the text box the draw position refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    /// Left edge, top of the ascender.
    #[default]
    LeftTop,
    /// Left edge, halfway between ascender top and descender bottom.
    LeftMiddle,
    /// Horizontal and vertical middle.
    Center,
}

impl Anchor {
    /// Top-left corner of `mask` when drawn at `position` with this anchor.
    pub fn origin(&self, position: [i32; 2], mask: &TextMask) -> [i32; 2] {
        let [x, y] = position;
        let half_w = (mask.width / 2) as i32;
        let half_h = (mask.height / 2) as i32;
        match self {
            Anchor::LeftTop => [x, y],
            Anchor::LeftMiddle => [x, y - half_h],
            Anchor::Center => [x - half_w, y - half_h],
        }
    }
}
