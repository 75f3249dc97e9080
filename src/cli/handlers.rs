// src/cli/handlers.rs
use std::io::{self, Write};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use thiserror::Error;

use crate::core::config::Config;
use crate::generators::{GeneratorError, PasswordGenerator};
use crate::models::GeneratedPassword;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Generator error: {0}")]
    Generator(#[from] GeneratorError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

// Handler for the generate command
pub fn handle_generate<W: Write>(config: &Config, out: &mut W) -> Result<(), CliError> {
    let passwords = match config.seed {
        Some(seed) => {
            log::info!("Using seeded random source ({})", seed);
            generate_with(config, ChaCha20Rng::seed_from_u64(seed))?
        }
        None => generate_with(config, rand::thread_rng())?,
    };

    if config.json_output {
        serde_json::to_writer_pretty(&mut *out, &passwords)?;
        writeln!(out)?;
    } else {
        for entry in &passwords {
            writeln!(out, "{}", entry.password)?;
        }
    }

    out.flush()?;
    Ok(())
}

fn generate_with<R: Rng>(config: &Config, rng: R) -> Result<Vec<GeneratedPassword>, CliError> {
    let options = &config.password;
    let mut generator = PasswordGenerator::with_rng(options.length, rng);
    log::debug!(
        "Generating {} password(s) of length {} (simple: {})",
        options.count,
        generator.length(),
        options.simple
    );

    let length = generator.length();
    let passwords = generator
        .generate_many(options.count, options.simple)?
        .into_iter()
        .map(|password| GeneratedPassword {
            password,
            length,
            simple: options.simple,
        })
        .collect();

    Ok(passwords)
}
