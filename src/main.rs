use clap::Parser;
use std::io;

use passgen::cli::handlers::{handle_generate, CliError};
use passgen::cli::Args;
use passgen::core::config::Config;
use passgen::logging;

fn main() -> Result<(), CliError> {
    let args = Args::parse();
    let config = Config::from_args(&args);

    logging::init(config.log_level);
    log::debug!("Loaded config: {:?}", config);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    handle_generate(&config, &mut out).map_err(|e| {
        log::error!("Password generation failed: {}", e);
        e
    })
}
