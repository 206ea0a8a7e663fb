//! Banner layout: every dimension, color, string and position of the graphic.
//!
//! [`BannerLayout::default`] is the store feature graphic. A JSON file may
//! override any subset of fields; omitted fields keep their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::Color;
use crate::font::{Anchor, FontChain, FontSpec, FontTier};
use crate::gradient::VerticalGradient;

/// Feature graphic width required by the store.
pub const WIDTH: u32 = 1024;
/// Feature graphic height required by the store.
pub const HEIGHT: u32 = 500;
/// Largest accepted canvas side.
pub const MAX_DIMENSION: u32 = 8192;
/// Default output file name.
pub const OUTPUT_FILE: &str = "feature-graphic.png";

/// #1565C0
pub const GRADIENT_START: Color = Color::rgb(21, 101, 192);
/// #42A5F5
pub const GRADIENT_END: Color = Color::rgb(66, 165, 245);

/// Errors from loading a layout file.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("failed to read layout {}: {source}", path.display())]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid layout JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid layout: {0}")]
    Invalid(String),
}

/// A positioned text element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TextLayout {
    pub text: String,
    pub position: [i32; 2],
    pub color: Color,
    #[serde(default)]
    pub anchor: Anchor,
}

/// The lock icon: a translucent disc with a pictograph, or a text fallback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IconLayout {
    pub center: [i32; 2],
    pub radius: u32,
    pub disc_color: Color,
    pub glyph: String,
    pub glyph_color: Color,
    /// Drawn with the title face when the glyph cannot be shaped.
    pub fallback_text: String,
    /// Offset of the fallback text's top-left from `center`.
    pub fallback_offset: [i32; 2],
    pub fallback_color: Color,
}

impl Default for IconLayout {
    fn default() -> Self {
        Self {
            center: [180, 180],
            radius: 90,
            disc_color: Color::rgba(255, 255, 255, 30),
            glyph: "\u{1F512}".to_string(),
            glyph_color: Color::white(),
            fallback_text: "LOCK".to_string(),
            fallback_offset: [-40, -60],
            fallback_color: Color::white(),
        }
    }
}

impl IconLayout {
    pub fn fallback_position(&self) -> [i32; 2] {
        [
            self.center[0] + self.fallback_offset[0],
            self.center[1] + self.fallback_offset[1],
        ]
    }
}

/// A single row of feature badges, left to right.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BadgeRow {
    pub labels: Vec<String>,
    pub origin: [i32; 2],
    /// Horizontal distance between consecutive badge origins.
    pub stride: i32,
    pub color: Color,
    /// Badge font candidates, resolved independently of the main chain.
    pub fonts: Vec<FontSpec>,
}

impl Default for BadgeRow {
    fn default() -> Self {
        Self {
            labels: vec![
                "\u{2713} AES-256".to_string(),
                "\u{2713} Zero Knowledge".to_string(),
                "\u{2713} Open Source".to_string(),
            ],
            origin: [580, 350],
            stride: 170,
            color: Color::white(),
            fonts: vec![FontSpec::new(
                "/System/Library/Fonts/Supplemental/Arial.ttf",
                24.0,
            )],
        }
    }
}

impl BadgeRow {
    /// Each label paired with its draw position.
    pub fn positions(&self) -> impl Iterator<Item = (&str, [i32; 2])> + '_ {
        let [x, y] = self.origin;
        (0i32..)
            .zip(self.labels.iter())
            .map(move |(i, label)| (label.as_str(), [x + i * self.stride, y]))
    }
}

/// Complete description of the banner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BannerLayout {
    pub width: u32,
    pub height: u32,
    pub gradient: VerticalGradient,
    pub icon: IconLayout,
    pub title: TextLayout,
    pub subtitle: TextLayout,
    pub badges: BadgeRow,
    pub fonts: FontChain,
    pub output_file: String,
}

impl Default for BannerLayout {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            gradient: VerticalGradient::new(GRADIENT_START, GRADIENT_END),
            icon: IconLayout::default(),
            title: TextLayout {
                text: "SECURE VAULT".to_string(),
                position: [580, 180],
                color: Color::white(),
                anchor: Anchor::LeftMiddle,
            },
            subtitle: TextLayout {
                text: "Military-Grade File Encryption".to_string(),
                position: [580, 280],
                color: Color::rgba(255, 255, 255, 200),
                anchor: Anchor::LeftMiddle,
            },
            badges: BadgeRow::default(),
            fonts: default_font_chain(),
            output_file: OUTPUT_FILE.to_string(),
        }
    }
}

/// macOS system fonts first, then user-installed copies.
pub fn default_font_chain() -> FontChain {
    const EMOJI: &str = "/System/Library/Fonts/Apple Color Emoji.ttc";
    FontChain::new(vec![
        FontTier {
            title: FontSpec::new("/System/Library/Fonts/Supplemental/Arial Bold.ttf", 80.0),
            subtitle: FontSpec::new("/System/Library/Fonts/Supplemental/Arial.ttf", 40.0),
            icon: FontSpec::new(EMOJI, 120.0),
        },
        FontTier {
            title: FontSpec::new("/Library/Fonts/Arial Bold.ttf", 80.0),
            subtitle: FontSpec::new("/Library/Fonts/Arial.ttf", 40.0),
            icon: FontSpec::new(EMOJI, 120.0),
        },
    ])
}

impl BannerLayout {
    /// Parse a (possibly partial) layout from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, LayoutError> {
        let layout: BannerLayout = serde_json::from_str(json)?;
        layout.validate()?;
        Ok(layout)
    }

    /// Load a (possibly partial) layout from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self, LayoutError> {
        let json = std::fs::read_to_string(path).map_err(|source| LayoutError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.width == 0 || self.height == 0 {
            return Err(LayoutError::Invalid(format!(
                "canvas must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        if self.width > MAX_DIMENSION || self.height > MAX_DIMENSION {
            return Err(LayoutError::Invalid(format!(
                "canvas sides are limited to {MAX_DIMENSION}px, got {}x{}",
                self.width, self.height
            )));
        }
        if self.icon.glyph.trim().is_empty() {
            return Err(LayoutError::Invalid("icon.glyph must not be blank".into()));
        }
        if self.icon.fallback_text.trim().is_empty() {
            return Err(LayoutError::Invalid(
                "icon.fallback_text must not be blank".into(),
            ));
        }
        if self.output_file.is_empty() {
            return Err(LayoutError::Invalid("output_file must not be empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_matches_feature_graphic() {
        let layout = BannerLayout::default();
        assert_eq!((layout.width, layout.height), (1024, 500));
        assert_eq!(layout.output_file, "feature-graphic.png");
        assert_eq!(layout.fonts.tiers.len(), 2);
        assert_eq!(layout.icon.fallback_position(), [140, 120]);
        assert!(layout.validate().is_ok());
    }

    #[test]
    fn test_badge_positions() {
        let layout = BannerLayout::default();
        let positions: Vec<_> = layout.badges.positions().collect();
        assert_eq!(
            positions,
            vec![
                ("\u{2713} AES-256", [580, 350]),
                ("\u{2713} Zero Knowledge", [750, 350]),
                ("\u{2713} Open Source", [920, 350]),
            ]
        );
    }

    #[test]
    fn test_partial_override() {
        let layout = BannerLayout::from_json_str(
            r#"{
                "title": { "text": "HELLO", "position": [10, 20], "color": [0, 0, 0] },
                "badges": { "stride": 200 },
                "fonts": []
            }"#,
        )
        .unwrap();

        assert_eq!(layout.title.text, "HELLO");
        assert_eq!(layout.title.anchor, Anchor::LeftTop);
        assert_eq!(layout.badges.stride, 200);
        assert_eq!(layout.badges.labels.len(), 3);
        assert!(layout.fonts.tiers.is_empty());
        assert_eq!(layout.width, WIDTH);
    }

    #[test]
    fn test_roundtrip_default() {
        let json = serde_json::to_string(&BannerLayout::default()).unwrap();
        assert_eq!(BannerLayout::from_json_str(&json).unwrap(), BannerLayout::default());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = BannerLayout::from_json_str(r#"{ "widht": 10 }"#).unwrap_err();
        assert!(matches!(err, LayoutError::Json(_)));
    }

    #[test]
    fn test_zero_size_rejected() {
        let err = BannerLayout::from_json_str(r#"{ "height": 0 }"#).unwrap_err();
        assert!(matches!(err, LayoutError::Invalid(_)));
    }

    #[test]
    fn test_oversized_canvas_rejected() {
        let err = BannerLayout::from_json_str(r#"{ "width": 4294967295, "height": 4294967295 }"#)
            .unwrap_err();
        assert!(matches!(err, LayoutError::Invalid(_)));

        let edge = format!(r#"{{ "width": {MAX_DIMENSION}, "height": 1 }}"#);
        assert!(BannerLayout::from_json_str(&edge).is_ok());
    }

    #[test]
    fn test_blank_icon_text_rejected() {
        for json in [
            r#"{ "icon": { "glyph": "" } }"#,
            r#"{ "icon": { "glyph": "  " } }"#,
            r#"{ "icon": { "fallback_text": "" } }"#,
        ] {
            let err = BannerLayout::from_json_str(json).unwrap_err();
            assert!(matches!(err, LayoutError::Invalid(_)), "{json}");
        }
    }

    #[test]
    fn test_missing_file() {
        let err = BannerLayout::from_json_file(Path::new("/nonexistent/layout.json")).unwrap_err();
        assert!(matches!(err, LayoutError::Io { .. }));
    }
}
