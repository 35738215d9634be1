use contact_table::common::logger::initialize_logger_at;
use log::LevelFilter;

/// Chain walks log at `trace`; integration runs stop at `debug` unless
/// `RUST_LOG` asks for more.
pub fn init_test_logger() {
    initialize_logger_at(LevelFilter::Debug);
}
