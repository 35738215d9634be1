use std::sync::Once;

use env_logger::Builder;
use log::LevelFilter;

static INIT: Once = Once::new();

/// Installs the global logger with this crate at `Info`.
pub fn initialize_logger() {
    initialize_logger_at(LevelFilter::Info);
}

/// Installs the global logger with this crate at `crate_level` and every
/// other target at `Warn`.
///
/// `RUST_LOG` is applied last and wins. Only the first call in a process has
/// any effect; later calls, or a logger installed elsewhere, are ignored.
pub fn initialize_logger_at(crate_level: LevelFilter) {
    INIT.call_once_force(|_| {
        let mut builder = Builder::new();
        builder
            .filter_level(LevelFilter::Warn)
            .filter_module("contact_table", crate_level)
            .format_timestamp_millis()
            .parse_default_env();

        if builder.try_init().is_err() {
            log::debug!("Logger already installed, keeping it");
        }
    });
}
