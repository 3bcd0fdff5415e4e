// src/api/handlers/mod.rs
pub mod analysis;
pub mod education;
pub mod generator;
pub mod system;
