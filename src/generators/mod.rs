// src/generators/mod.rs
pub mod improve;
pub mod password;

pub use improve::suggest_improvements;
pub use password::{GeneratedPassword, GeneratorError, PasswordGenerator, MAX_GENERATED_LENGTH};
