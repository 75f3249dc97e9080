// src/core/config.rs
use log::LevelFilter;

use crate::cli::Args;
use crate::models::PasswordGenerationOptions;

// Configuration for a single run
#[derive(Debug, Clone)]
pub struct Config {
    // Password Generation
    pub password: PasswordGenerationOptions,
    pub seed: Option<u64>,

    // Output
    pub json_output: bool,

    // Logging
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            password: PasswordGenerationOptions::default(),
            seed: None,
            json_output: false,
            log_level: LevelFilter::Warn,
        }
    }
}

impl Config {
    // Layer command line flags over the defaults
    pub fn from_args(args: &Args) -> Self {
        let mut config = Config::default();

        config.password.length = args.length;
        config.password.simple = !args.punctuation;
        config.password.count = args.count;
        config.seed = args.seed;
        config.json_output = args.json;

        config.log_level = match args.verbose {
            0 => config.log_level,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        };

        config
    }
}
