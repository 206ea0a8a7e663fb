//! Banner rendering for store listings.
//!
//! This crate draws the app store feature graphic: a vertical gradient, a
//! lock icon on a translucent disc, a title, a subtitle and a row of feature
//! badges, encoded as an RGB PNG.
//!
//! # Example
//!
//! ```no_run
//! use bannergen_render::{generate_feature_graphic, BannerLayout, FsFontLoader};
//! use std::path::Path;
//!
//! let report = generate_feature_graphic(&BannerLayout::default(), Path::new("."), &FsFontLoader)
//!     .unwrap();
//! println!("{} ({}x{})", report.path.display(), report.width, report.height);
//! ```
//!
//! # Determinism
//!
//! - Gradient rows use truncating integer interpolation
//! - Compositing uses integer alpha math
//! - PNG encoding uses fixed compression settings
//! - With only the built-in face available, output is byte-identical on
//!   every system
//!
//! Output with system fonts depends on which font files are installed.

pub mod canvas;
pub mod color;
pub mod font;
pub mod generate;
pub mod gradient;
pub mod layout;
pub mod png;
pub mod shapes;
pub mod text;

// Re-export main types for convenience
pub use canvas::Canvas;
pub use color::Color;
pub use font::{
    Anchor, Face, FontChain, FontLoader, FontSource, FontSpec, FsFontLoader, ResolvedFonts,
};
pub use generate::{
    draw_icon, generate_feature_graphic, render_banner, GenerateError, GenerateReport,
    IconOutcome, RenderedBanner,
};
pub use gradient::VerticalGradient;
pub use layout::{BannerLayout, LayoutError};
pub use crate::png::{PngConfig, PngError};
