//! bannergen - store listing feature graphic generator
//!
//! Run with no arguments to write `feature-graphic.png` next to this crate.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use bannergen_cli::commands::generate::{self, GenerateOptions};
use bannergen_cli::logging::init_logging;

/// bannergen - Store Listing Feature Graphic Generator
#[derive(Parser)]
#[command(name = "bannergen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output directory (default: the bannergen-cli crate directory)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON layout file overriding the default banner
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output a machine-readable JSON report
    #[arg(long)]
    json: bool,

    /// Diagnostic log filter, e.g. "debug" (overrides RUST_LOG)
    #[arg(long, value_name = "FILTER")]
    log: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log.as_deref());

    let options = GenerateOptions {
        output_dir: cli.output,
        config: cli.config,
        json: cli.json,
    };

    match generate::run(&options) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
