// src/lib.rs
pub mod cli;
pub mod core;
pub mod generators;
pub mod logging;
pub mod models;

pub use generators::{Alphabet, GeneratorError, PasswordGenerator};
