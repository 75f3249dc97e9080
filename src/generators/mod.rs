// src/generators/mod.rs
use thiserror::Error;

pub mod charset;
pub mod password;

pub use charset::Alphabet;
pub use password::{PasswordGenerator, MIN_PASSWORD_LENGTH};

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

pub type Result<T> = std::result::Result<T, GeneratorError>;
