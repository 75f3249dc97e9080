// src/logging/mod.rs
use log::LevelFilter;

/// Send logs to stderr so stdout only carries passwords.
///
/// `RUST_LOG` still wins over the configured level when it is set.
pub fn init(level: LevelFilter) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .format_timestamp_secs()
        .format_module_path(true)
        .target(env_logger::Target::Stderr)
        .parse_default_env();

    if let Err(e) = builder.try_init() {
        eprintln!("Logger already initialized: {}", e);
    }
}
