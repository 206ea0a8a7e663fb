//! Generate command implementation
//!
//! Renders the feature graphic and reports where it went.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use bannergen_render::{
    generate_feature_graphic, BannerLayout, FontLoader, FsFontLoader, GenerateReport,
};
use colored::Colorize;

/// Line printed when the font chain falls back to the built-in face.
pub const FONT_FALLBACK_WARNING: &str = "Warning: Custom fonts not found, using default";

/// Options for one generate run.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Output directory (default: [`default_output_dir`]).
    pub output_dir: Option<PathBuf>,
    /// JSON layout overriding the default banner.
    pub config: Option<PathBuf>,
    /// Print a JSON report instead of status lines.
    pub json: bool,
}

/// Directory of this crate, where the graphic lands by default.
pub fn default_output_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Run the generate command against system fonts, printing to stdout.
///
/// # Returns
/// Exit code: 0 success. Layout and write failures are returned as errors.
pub fn run(options: &GenerateOptions) -> Result<ExitCode> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_with(options, &FsFontLoader, &mut out)?;
    Ok(ExitCode::SUCCESS)
}

/// Run the generate command with an explicit font loader and output sink.
pub fn run_with(
    options: &GenerateOptions,
    loader: &dyn FontLoader,
    out: &mut dyn Write,
) -> Result<GenerateReport> {
    let layout = load_layout(options.config.as_deref())?;
    let output_dir = options
        .output_dir
        .clone()
        .unwrap_or_else(default_output_dir);

    let report = generate_feature_graphic(&layout, &output_dir, loader)
        .context("Failed to generate feature graphic")?;

    if options.json {
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        writeln!(out, "{json}")?;
    } else {
        print_human(&report, out)?;
    }

    Ok(report)
}

fn load_layout(config: Option<&Path>) -> Result<BannerLayout> {
    match config {
        Some(path) => BannerLayout::from_json_file(path)
            .with_context(|| format!("Failed to load layout: {}", path.display())),
        None => Ok(BannerLayout::default()),
    }
}

fn print_human(report: &GenerateReport, out: &mut dyn Write) -> Result<()> {
    if report.fonts_fell_back() {
        writeln!(out, "{}", FONT_FALLBACK_WARNING.yellow())?;
    }
    writeln!(
        out,
        "{} {}",
        "\u{2705} Feature graphic created:".green().bold(),
        report.path.display()
    )?;
    writeln!(out, "   Size: {}x{}px", report.width, report.height)?;
    writeln!(out, "   {}", "Ready for Google Play Console!".dimmed())?;
    Ok(())
}
