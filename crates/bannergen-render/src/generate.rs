//! The feature graphic pipeline.
//!
//! Canvas allocation, gradient fill, font resolution, icon and text drawing,
//! badge row, PNG write. Only the font chain branches; everything else is a
//! straight line.

use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::canvas::Canvas;
use crate::color::Color;
use crate::font::{
    resolve_fonts, resolve_single, Anchor, Face, FontLoader, FontSource, ResolvedFonts,
};
use crate::layout::{BannerLayout, IconLayout, LayoutError};
use crate::png::{save_png, PngConfig, PngError};
use crate::shapes::fill_circle;
use crate::text::{draw_text, try_draw_text};

/// Errors from generating the graphic.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error("failed to resolve output directory {}: {source}", path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: PngError,
    },
}

/// Which variant of the icon ended up on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconOutcome {
    /// The pictograph rendered with the icon face.
    Glyph,
    /// The pictograph could not be shaped; the fallback text was drawn.
    FallbackText,
}

/// A composited banner, not yet encoded.
#[derive(Debug, Clone)]
pub struct RenderedBanner {
    pub canvas: Canvas,
    pub icon: IconOutcome,
}

/// Outcome of a full run.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateReport {
    /// Absolute path of the written PNG.
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub font_source: FontSource,
    pub icon: IconOutcome,
    /// BLAKE3 hash of the PNG bytes.
    pub hash: String,
}

impl GenerateReport {
    /// Whether the built-in face stood in for the configured fonts.
    pub fn fonts_fell_back(&self) -> bool {
        self.font_source == FontSource::BuiltinDefault
    }
}

/// Draw the disc, then the pictograph or, failing that, the fallback text.
///
/// Exactly one of the two is drawn.
pub fn draw_icon(canvas: &mut Canvas, icon: &IconLayout, fonts: &ResolvedFonts) -> IconOutcome {
    fill_circle(canvas, icon.center, icon.radius, icon.disc_color);

    match try_draw_text(
        canvas,
        &fonts.icon,
        &icon.glyph,
        icon.center,
        Anchor::Center,
        icon.glyph_color,
    ) {
        Ok(()) => IconOutcome::Glyph,
        Err(err) => {
            log::debug!("icon glyph unavailable ({err}), drawing fallback text");
            draw_text(
                canvas,
                &fonts.title,
                &icon.fallback_text,
                icon.fallback_position(),
                Anchor::LeftTop,
                icon.fallback_color,
            );
            IconOutcome::FallbackText
        }
    }
}

/// Composite the whole banner with already-resolved faces.
pub fn render_banner(
    layout: &BannerLayout,
    fonts: &ResolvedFonts,
    badge_face: &Face,
) -> RenderedBanner {
    let mut canvas = Canvas::new(layout.width, layout.height, Color::black());
    layout.gradient.paint(&mut canvas);

    let icon = draw_icon(&mut canvas, &layout.icon, fonts);

    for (face, text) in [(&fonts.title, &layout.title), (&fonts.subtitle, &layout.subtitle)] {
        draw_text(&mut canvas, face, &text.text, text.position, text.anchor, text.color);
    }

    for (label, position) in layout.badges.positions() {
        draw_text(
            &mut canvas,
            badge_face,
            label,
            position,
            Anchor::LeftTop,
            layout.badges.color,
        );
    }

    RenderedBanner { canvas, icon }
}

/// Run the full pipeline and write `layout.output_file` into `out_dir`.
///
/// The layout is validated first. An existing file at the output path is
/// overwritten.
pub fn generate_feature_graphic(
    layout: &BannerLayout,
    out_dir: &Path,
    loader: &dyn FontLoader,
) -> Result<GenerateReport, GenerateError> {
    layout.validate()?;
    let out_dir = std::path::absolute(out_dir).map_err(|source| GenerateError::OutputDir {
        path: out_dir.to_path_buf(),
        source,
    })?;
    let path = out_dir.join(&layout.output_file);

    let fonts = resolve_fonts(&layout.fonts, loader);
    let badge_face = resolve_single(&layout.badges.fonts, loader);

    let banner = render_banner(layout, &fonts, &badge_face);
    log::debug!(
        "rendered {}x{} banner (icon: {:?})",
        layout.width,
        layout.height,
        banner.icon
    );

    let hash = save_png(&banner.canvas, &path, &PngConfig::default()).map_err(|source| {
        GenerateError::Save {
            path: path.clone(),
            source,
        }
    })?;

    Ok(GenerateReport {
        path,
        width: layout.width,
        height: layout.height,
        font_source: fonts.source,
        icon: banner.icon,
        hash,
    })
}
