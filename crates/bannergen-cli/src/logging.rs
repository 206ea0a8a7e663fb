//! Logger initialization.
//!
//! The status lines go to stdout through `println!`; the `log` facade carries
//! diagnostics to stderr. By default only errors are shown, since the font
//! fallback already has its own stdout warning line.

/// Filter used when neither `--log` nor `RUST_LOG` is given.
pub const DEFAULT_FILTER: &str = "error";

/// Pick the `env_logger` filter: `--log`, then `RUST_LOG`, then [`DEFAULT_FILTER`].
pub fn select_filter(flag: Option<&str>, env: Option<&str>) -> String {
    flag.or(env)
        .filter(|filter| !filter.trim().is_empty())
        .unwrap_or(DEFAULT_FILTER)
        .to_string()
}

/// Install the global logger. Later calls are ignored.
pub fn init_logging(flag: Option<&str>) {
    let env = std::env::var("RUST_LOG").ok();
    let filter = select_filter(flag, env.as_deref());

    let initialized = env_logger::Builder::new()
        .parse_filters(&filter)
        .format_timestamp(None)
        .try_init()
        .is_ok();
    if initialized {
        log::debug!("logging initialized with filter {filter:?}");
    }
}
