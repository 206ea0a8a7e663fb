//! Built-in 5x7 bitmap face.
//!
//! Always available, so it terminates every font fallback chain. Covers
//! printable ASCII plus a check mark. Glyphs are stored as one bitmask per
//! row, most significant of the five bits on the left.

use super::{RenderError, TextMask};

/// Glyph cell width in font units.
pub const CELL_WIDTH: u32 = 5;
/// Glyph cell height in font units.
pub const CELL_HEIGHT: u32 = 7;
/// Horizontal advance per character (cell plus 1 unit of spacing).
pub const ADVANCE: u32 = CELL_WIDTH + 1;
/// Scale used when no requested size is known.
pub const DEFAULT_SCALE: u32 = 2;
/// Requested pixel size covered by one step of scale.
pub const PX_PER_SCALE: f32 = 20.0;
/// Largest scale a requested size maps to.
pub const MAX_SCALE: u32 = 16;

const CHECK_MARK_CHAR: char = '\u{2713}';

/// The compiled-in bitmap face at an integer pixel scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuiltinFace {
    scale: u32,
}

impl BuiltinFace {
    /// Create a face where each font unit is `scale` pixels (minimum 1).
    pub fn new(scale: u32) -> Self {
        Self {
            scale: scale.max(1),
        }
    }

    /// Face standing in for a font requested at `px` pixels.
    ///
    /// Scales by whole steps of [`PX_PER_SCALE`], so a 24px request draws
    /// 5x7 cells and an 80px request draws 20x28 cells.
    pub fn for_px(px: f32) -> Self {
        if !px.is_finite() {
            return Self::default();
        }
        // `as` saturates: negative sizes become 0 and are promoted to 1
        Self::new(((px / PX_PER_SCALE) as u32).min(MAX_SCALE))
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Height of a rendered line in pixels.
    pub fn line_height(&self) -> u32 {
        CELL_HEIGHT * self.scale
    }

    /// Advance width of `text` in pixels.
    pub fn text_width(&self, text: &str) -> u32 {
        text.chars().count() as u32 * ADVANCE * self.scale
    }

    /// Whether `c` has a visible glyph. Whitespace always passes.
    pub fn check_glyph(&self, c: char) -> Result<(), RenderError> {
        if c.is_whitespace() {
            return Ok(());
        }
        match glyph_rows(c) {
            None => Err(RenderError::MissingGlyph(c)),
            Some(rows) if rows.iter().all(|bits| *bits == 0) => Err(RenderError::EmptyGlyph(c)),
            Some(_) => Ok(()),
        }
    }

    /// Rasterize `text`; characters without a glyph leave an empty cell.
    pub fn rasterize(&self, text: &str) -> TextMask {
        let line_height = self.line_height();
        let mut mask = TextMask::new(self.text_width(text), line_height, line_height);

        for (i, c) in text.chars().enumerate() {
            let Some(rows) = glyph_rows(c) else {
                continue;
            };
            let cell_x = i as u32 * ADVANCE * self.scale;

            for (row, bits) in (0u32..).zip(rows.iter()) {
                for col in 0..CELL_WIDTH {
                    if bits & (1u8 << (CELL_WIDTH - 1 - col)) == 0 {
                        continue;
                    }
                    let x0 = cell_x + col * self.scale;
                    let y0 = row * self.scale;
                    for sy in 0..self.scale {
                        for sx in 0..self.scale {
                            mask.put(x0 + sx, y0 + sy, 255);
                        }
                    }
                }
            }
        }

        mask
    }
}

impl Default for BuiltinFace {
    fn default() -> Self {
        Self::new(DEFAULT_SCALE)
    }
}

fn glyph_rows(c: char) -> Option<&'static [u8; 7]> {
    match c {
        ' '..='~' => GLYPHS.get(c as usize - 0x20),
        CHECK_MARK_CHAR => Some(&CHECK_MARK),
        _ => None,
    }
}

const CHECK_MARK: [u8; 7] = [
    0b00000, 0b00001, 0b00010, 0b10010, 0b10100, 0b01000, 0b00000,
];

/// Printable ASCII, space (0x20) through tilde (0x7E).
static GLYPHS: [[u8; 7]; 95] = [
    [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000], // ' '
    [0b00100, 0b00100, 0b00100, 0b00100, 0b00000, 0b00100, 0b00000], // '!'
    [0b01010, 0b01010, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000], // '"'
    [0b01010, 0b11111, 0b01010, 0b11111, 0b01010, 0b00000, 0b00000], // '#'
    [0b00100, 0b01110, 0b10100, 0b01110, 0b00101, 0b01110, 0b00100], // '$'
    [0b11001, 0b11010, 0b00100, 0b01011, 0b10011, 0b00000, 0b00000], // '%'
    [0b01100, 0b10010, 0b01100, 0b10010, 0b10011, 0b01101, 0b00000], // '&'
    [0b00100, 0b00100, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000], // '\''
    [0b00100, 0b01000, 0b01000, 0b01000, 0b01000, 0b00100, 0b00000], // '('
    [0b00100, 0b00010, 0b00010, 0b00010, 0b00010, 0b00100, 0b00000], // ')'
    [0b00000, 0b10101, 0b01110, 0b10101, 0b00000, 0b00000, 0b00000], // '*'
    [0b00000, 0b00100, 0b00100, 0b11111, 0b00100, 0b00100, 0b00000], // '+'
    [0b00000, 0b00000, 0b00000, 0b00000, 0b00100, 0b00100, 0b01000], // ','
    [0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000], // '-'
    [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00100, 0b00000], // '.'
    [0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b00000, 0b00000], // '/'
    [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110], // '0'
    [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110], // '1'
    [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111], // '2'
    [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110], // '3'
    [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010], // '4'
    [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110], // '5'
    [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110], // '6'
    [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000], // '7'
    [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110], // '8'
    [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100], // '9'
    [0b00000, 0b00100, 0b00000, 0b00000, 0b00100, 0b00000, 0b00000], // ':'
    [0b00000, 0b00100, 0b00000, 0b00000, 0b00100, 0b00100, 0b01000], // ';'
    [0b00010, 0b00100, 0b01000, 0b10000, 0b01000, 0b00100, 0b00010], // '<'
    [0b00000, 0b00000, 0b11111, 0b00000, 0b11111, 0b00000, 0b00000], // '='
    [0b01000, 0b00100, 0b00010, 0b00001, 0b00010, 0b00100, 0b01000], // '>'
    [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b00000, 0b00100], // '?'
    [0b01110, 0b10001, 0b10111, 0b10101, 0b10111, 0b10000, 0b01110], // '@'
    [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001], // 'A'
    [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110], // 'B'
    [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110], // 'C'
    [0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110], // 'D'
    [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111], // 'E'
    [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000], // 'F'
    [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111], // 'G'
    [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001], // 'H'
    [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110], // 'I'
    [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100], // 'J'
    [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001], // 'K'
    [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111], // 'L'
    [0b10001, 0b11011, 0b10101, 0b10001, 0b10001, 0b10001, 0b10001], // 'M'
    [0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, 0b10001], // 'N'
    [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110], // 'O'
    [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000], // 'P'
    [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101], // 'Q'
    [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001], // 'R'
    [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110], // 'S'
    [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100], // 'T'
    [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110], // 'U'
    [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100], // 'V'
    [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b11011, 0b10001], // 'W'
    [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001], // 'X'
    [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100], // 'Y'
    [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111], // 'Z'
    [0b01110, 0b01000, 0b01000, 0b01000, 0b01000, 0b01000, 0b01110], // '['
    [0b10000, 0b01000, 0b00100, 0b00010, 0b00001, 0b00000, 0b00000], // '\\'
    [0b01110, 0b00010, 0b00010, 0b00010, 0b00010, 0b00010, 0b01110], // ']'
    [0b00100, 0b01010, 0b10001, 0b00000, 0b00000, 0b00000, 0b00000], // '^'
    [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b11111], // '_'
    [0b01000, 0b00100, 0b00010, 0b00000, 0b00000, 0b00000, 0b00000], // '`'
    [0b00000, 0b00000, 0b01110, 0b00001, 0b01111, 0b10001, 0b01111], // 'a'
    [0b10000, 0b10000, 0b10110, 0b11001, 0b10001, 0b10001, 0b11110], // 'b'
    [0b00000, 0b00000, 0b01110, 0b10000, 0b10000, 0b10001, 0b01110], // 'c'
    [0b00001, 0b00001, 0b01101, 0b10011, 0b10001, 0b10001, 0b01111], // 'd'
    [0b00000, 0b00000, 0b01110, 0b10001, 0b11111, 0b10000, 0b01110], // 'e'
    [0b00110, 0b01001, 0b01000, 0b11100, 0b01000, 0b01000, 0b01000], // 'f'
    [0b00000, 0b01111, 0b10001, 0b10001, 0b01111, 0b00001, 0b01110], // 'g'
    [0b10000, 0b10000, 0b10110, 0b11001, 0b10001, 0b10001, 0b10001], // 'h'
    [0b00100, 0b00000, 0b01100, 0b00100, 0b00100, 0b00100, 0b01110], // 'i'
    [0b00010, 0b00000, 0b00110, 0b00010, 0b00010, 0b10010, 0b01100], // 'j'
    [0b10000, 0b10000, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010], // 'k'
    [0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110], // 'l'
    [0b00000, 0b00000, 0b11010, 0b10101, 0b10101, 0b10001, 0b10001], // 'm'
    [0b00000, 0b00000, 0b10110, 0b11001, 0b10001, 0b10001, 0b10001], // 'n'
    [0b00000, 0b00000, 0b01110, 0b10001, 0b10001, 0b10001, 0b01110], // 'o'
    [0b00000, 0b00000, 0b11110, 0b10001, 0b11110, 0b10000, 0b10000], // 'p'
    [0b00000, 0b00000, 0b01101, 0b10011, 0b01111, 0b00001, 0b00001], // 'q'
    [0b00000, 0b00000, 0b10110, 0b11001, 0b10000, 0b10000, 0b10000], // 'r'
    [0b00000, 0b00000, 0b01110, 0b10000, 0b01110, 0b00001, 0b11110], // 's'
    [0b01000, 0b01000, 0b11100, 0b01000, 0b01000, 0b01001, 0b00110], // 't'
    [0b00000, 0b00000, 0b10001, 0b10001, 0b10001, 0b10011, 0b01101], // 'u'
    [0b00000, 0b00000, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100], // 'v'
    [0b00000, 0b00000, 0b10001, 0b10001, 0b10101, 0b10101, 0b01010], // 'w'
    [0b00000, 0b00000, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001], // 'x'
    [0b00000, 0b00000, 0b10001, 0b10001, 0b01111, 0b00001, 0b01110], // 'y'
    [0b00000, 0b00000, 0b11111, 0b00010, 0b00100, 0b01000, 0b11111], // 'z'
    [0b00010, 0b00100, 0b00100, 0b01000, 0b00100, 0b00100, 0b00010], // '{'
    [0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100], // '|'
    [0b01000, 0b00100, 0b00100, 0b00010, 0b00100, 0b00100, 0b01000], // '}'
    [0b00000, 0b00000, 0b01000, 0b10101, 0b00010, 0b00000, 0b00000], // '~'
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_printable_ascii_has_a_glyph() {
        let face = BuiltinFace::default();
        for c in '!'..='~' {
            assert!(face.check_glyph(c).is_ok(), "missing glyph for {c:?}");
        }
        assert!(face.check_glyph(' ').is_ok());
        assert!(face.check_glyph('\u{2713}').is_ok());
    }

    #[test]
    fn test_pictographs_are_missing() {
        let face = BuiltinFace::default();
        assert!(matches!(
            face.check_glyph('\u{1F512}'),
            Err(RenderError::MissingGlyph('\u{1F512}'))
        ));
    }

    #[test]
    fn test_text_metrics() {
        let face = BuiltinFace::new(3);
        assert_eq!(face.line_height(), 21);
        assert_eq!(face.text_width("LOCK"), 4 * 6 * 3);

        let mask = face.rasterize("LOCK");
        assert_eq!(mask.width, 72);
        assert_eq!(mask.height, 21);
        assert_eq!(mask.baseline, 21);
    }

    #[test]
    fn test_letter_l_left_column() {
        let face = BuiltinFace::new(2);
        let mask = face.rasterize("L");

        // Left stroke spans the full cell height
        for y in 0..14 {
            assert_eq!(mask.get(0, y), 255);
            assert_eq!(mask.get(1, y), 255);
        }
        // Bottom bar spans the full cell width
        for x in 0..10 {
            assert_eq!(mask.get(x, 13), 255);
        }
        assert_eq!(mask.get(2, 0), 0);
    }

    #[test]
    fn test_unknown_characters_leave_gaps() {
        let face = BuiltinFace::new(1);
        let mask = face.rasterize("\u{1F512}");
        assert_eq!(mask.width, ADVANCE);
        assert!(mask.is_blank());
    }

    #[test]
    fn test_zero_scale_is_promoted() {
        assert_eq!(BuiltinFace::new(0).scale(), 1);
    }

    #[test]
    fn test_scale_follows_requested_size() {
        assert_eq!(BuiltinFace::for_px(24.0).scale(), 1);
        assert_eq!(BuiltinFace::for_px(40.0).scale(), 2);
        assert_eq!(BuiltinFace::for_px(80.0).scale(), 4);
        assert_eq!(BuiltinFace::for_px(4.0).scale(), 1);
        assert_eq!(BuiltinFace::for_px(-10.0).scale(), 1);
        assert_eq!(BuiltinFace::for_px(1.0e9).scale(), MAX_SCALE);
        assert_eq!(BuiltinFace::for_px(f32::NAN), BuiltinFace::default());
    }
}
