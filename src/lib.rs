//! Password strength analysis with brute-force crack-time estimates across
//! plaintext, MD5, SHA-256, bcrypt and Argon2 storage.

pub mod analyzer;
pub mod api;
pub mod cli;
pub mod core;
pub mod crypto;
pub mod education;
pub mod generators;
pub mod logging;
pub mod models;
pub mod utils;

pub use analyzer::{analyze, AnalysisError, AnalysisResult, PasswordAnalyzer};
pub use crate::core::config::Config;
