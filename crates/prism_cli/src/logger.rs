use log::LevelFilter;

/// Initialize the logger with the specified level.
///
/// `RUST_LOG` is still read, and `level` is applied on top of it.
pub fn init_logger(level: LevelFilter) {
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}
