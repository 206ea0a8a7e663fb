//! Font fallback chains.
//!
//! Each role (title, subtitle, icon) has one candidate per tier. Tiers are
//! tried in order and a tier only counts when all three of its candidates
//! load. When every tier fails the built-in face fills all roles, so
//! resolution itself never fails.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Face, TrueTypeFace};

/// Errors from loading a single font candidate.
#[derive(Debug, Error)]
pub enum FontLoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {reason}", path.display())]
    Parse { path: PathBuf, reason: String },

    #[error("invalid pixel size {size} for {}", path.display())]
    InvalidSize { path: PathBuf, size: f32 },
}

/// One candidate font file at a pixel size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    pub path: PathBuf,
    pub size: f32,
    /// Face index inside a font collection (`.ttc`).
    #[serde(default)]
    pub collection_index: u32,
}

impl FontSpec {
    pub fn new(path: impl Into<PathBuf>, size: f32) -> Self {
        Self {
            path: path.into(),
            size,
            collection_index: 0,
        }
    }
}

/// Candidates for all three roles, resolved together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontTier {
    pub title: FontSpec,
    pub subtitle: FontSpec,
    pub icon: FontSpec,
}

/// Ordered tiers, implicitly terminated by the built-in face.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FontChain {
    pub tiers: Vec<FontTier>,
}

impl FontChain {
    pub fn new(tiers: Vec<FontTier>) -> Self {
        Self { tiers }
    }
}

/// Logical text role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontRole {
    Title,
    Subtitle,
    Icon,
    Badge,
}

impl fmt::Display for FontRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FontRole::Title => "title",
            FontRole::Subtitle => "subtitle",
            FontRole::Icon => "icon",
            FontRole::Badge => "badge",
        };
        f.write_str(name)
    }
}

/// Where the resolved faces came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FontSource {
    /// Index of the tier that loaded.
    Tier(usize),
    /// No tier loaded; every role uses the built-in face.
    BuiltinDefault,
}

/// Faces for the three chained roles.
#[derive(Debug, Clone)]
pub struct ResolvedFonts {
    pub title: Face,
    pub subtitle: Face,
    pub icon: Face,
    pub source: FontSource,
}

impl ResolvedFonts {
    /// All roles on the built-in face.
    pub fn builtin() -> Self {
        Self {
            title: Face::builtin(),
            subtitle: Face::builtin(),
            icon: Face::builtin(),
            source: FontSource::BuiltinDefault,
        }
    }

    /// All roles on the built-in face, sized after `tier`'s requests.
    pub fn builtin_for(tier: &FontTier) -> Self {
        Self {
            title: Face::builtin_for(tier.title.size),
            subtitle: Face::builtin_for(tier.subtitle.size),
            icon: Face::builtin_for(tier.icon.size),
            source: FontSource::BuiltinDefault,
        }
    }

    /// Whether the chain ran out and the built-in face was substituted.
    pub fn fell_back(&self) -> bool {
        self.source == FontSource::BuiltinDefault
    }
}

/// Loads a face for one candidate.
///
/// The filesystem loader is the production implementation; tests inject
/// loaders that simulate installed or missing fonts.
pub trait FontLoader {
    fn load(&self, spec: &FontSpec) -> Result<Face, FontLoadError>;
}

/// Reads font files from disk and parses them with fontdue.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsFontLoader;

impl FontLoader for FsFontLoader {
    fn load(&self, spec: &FontSpec) -> Result<Face, FontLoadError> {
        if !spec.size.is_finite() || spec.size <= 0.0 {
            return Err(FontLoadError::InvalidSize {
                path: spec.path.clone(),
                size: spec.size,
            });
        }
        let bytes = std::fs::read(&spec.path).map_err(|source| FontLoadError::Io {
            path: spec.path.clone(),
            source,
        })?;
        let face = TrueTypeFace::from_bytes(bytes, spec.size, spec.collection_index).map_err(
            |reason| FontLoadError::Parse {
                path: spec.path.clone(),
                reason,
            },
        )?;
        log::debug!("loaded font {} at {}px", spec.path.display(), spec.size);
        Ok(Face::TrueType(face))
    }
}

fn load_role(
    loader: &dyn FontLoader,
    spec: &FontSpec,
    role: FontRole,
) -> Result<Face, FontLoadError> {
    loader.load(spec).inspect_err(|err| {
        log::debug!("{role} font candidate rejected: {err}");
    })
}

fn load_tier(loader: &dyn FontLoader, tier: &FontTier) -> Result<ResolvedFonts, FontLoadError> {
    Ok(ResolvedFonts {
        title: load_role(loader, &tier.title, FontRole::Title)?,
        subtitle: load_role(loader, &tier.subtitle, FontRole::Subtitle)?,
        icon: load_role(loader, &tier.icon, FontRole::Icon)?,
        source: FontSource::BuiltinDefault,
    })
}

/// Resolve the title, subtitle and icon faces through `chain`.
pub fn resolve_fonts(chain: &FontChain, loader: &dyn FontLoader) -> ResolvedFonts {
    for (index, tier) in chain.tiers.iter().enumerate() {
        match load_tier(loader, tier) {
            Ok(fonts) => {
                log::debug!("font tier {index} resolved");
                return ResolvedFonts {
                    source: FontSource::Tier(index),
                    ..fonts
                };
            }
            Err(err) => log::debug!("font tier {index} abandoned: {err}"),
        }
    }

    log::warn!("no font tier could be loaded, using the built-in face");
    match chain.tiers.first() {
        Some(tier) => ResolvedFonts::builtin_for(tier),
        None => ResolvedFonts::builtin(),
    }
}

/// First candidate that loads, else the built-in face sized after the first
/// candidate. Silent on fallback.
pub fn resolve_single(candidates: &[FontSpec], loader: &dyn FontLoader) -> Face {
    candidates
        .iter()
        .find_map(|spec| load_role(loader, spec, FontRole::Badge).ok())
        .unwrap_or_else(|| match candidates.first() {
            Some(spec) => Face::builtin_for(spec.size),
            None => Face::builtin(),
        })
}
