//! Logger setup for the command-line binary

use log::LevelFilter;
use std::env;

/// Initialize `env_logger` on stderr
///
/// Logs warnings by default and debug output with `verbose`. An explicit
/// `RUST_LOG` overrides both. Calling this twice is harmless.
pub fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    if let Ok(filters) = env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }

    if builder.try_init().is_ok() {
        log::debug!("Logger initialized at {level:?} level");
    }
}
