// src/models.rs
use serde::{Deserialize, Serialize};

// Password generation options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordGenerationOptions {
    pub length: usize,
    pub simple: bool,
    pub count: usize,
}

impl Default for PasswordGenerationOptions {
    fn default() -> Self {
        Self {
            length: 32,
            simple: true,
            count: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedPassword {
    pub password: String,
    pub length: usize,
    pub simple: bool,
}
