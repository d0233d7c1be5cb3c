//! Logger setup for the command-line binary

use log::LevelFilter;
use std::env;

/// Initialize logging to stderr.
///
/// `Info` by default, `Debug` when `verbose` is set. An explicit `RUST_LOG`
/// overrides both.
pub fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    if let Ok(spec) = env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    // A second init (e.g. from tests) is harmless
    if builder.try_init().is_ok() {
        log::debug!("Logger initialized at {level:?} level");
    }
}
