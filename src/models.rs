// src/models.rs
use serde::{Serialize, Deserialize};
use utoipa::ToSchema;

use crate::analyzer::StrengthLevel;

// Password generation options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PasswordGenerationOptions {
    pub length: usize,
    pub include_lowercase: bool,
    pub include_uppercase: bool,
    pub include_digits: bool,
    pub include_special: bool,
}

impl Default for PasswordGenerationOptions {
    fn default() -> Self {
        Self {
            length: 16,
            include_lowercase: true,
            include_uppercase: true,
            include_digits: true,
            include_special: true,
        }
    }
}

/// A mutated variant of a password together with its own analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Improvement {
    pub password: String,
    pub strategy: String,
    pub description: String,
    pub score: u8,
    pub level: StrengthLevel,
    pub length: usize,
}
