// src/core/config.rs
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use log::LevelFilter;

use crate::crypto::HashParams;

// Configuration for the password lab
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    // Web Interface
    pub web_address: String,
    pub web_port: u16,

    // Hashing demo
    pub bcrypt_cost: u32,
    pub argon2_memory_cost: u32,
    pub argon2_time_cost: u32,
    pub argon2_parallelism: u32,

    // Generation and improvement
    pub default_password_length: usize,
    pub improve_top_n: usize,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,

    // Variables that were set but could not be used, as (key, raw value)
    pub rejected: Vec<(String, String)>,
}

impl Default for Config {
    fn default() -> Self {
        let hash = HashParams::default();
        Self {
            // Web Interface
            web_address: "127.0.0.1".to_string(),
            web_port: 5000,

            // Hashing demo
            bcrypt_cost: hash.bcrypt_cost,
            argon2_memory_cost: hash.argon2_memory_cost,
            argon2_time_cost: hash.argon2_time_cost,
            argon2_parallelism: hash.argon2_parallelism,

            // Generation and improvement
            default_password_length: 16,
            improve_top_n: 5,

            // Logging
            log_level: LevelFilter::Info,
            log_file: None,

            rejected: Vec::new(),
        }
    }
}

pub fn parse_log_level(level: &str) -> Option<LevelFilter> {
    match level.to_lowercase().as_str() {
        "off" => Some(LevelFilter::Off),
        "error" => Some(LevelFilter::Error),
        "warn" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    rejected: &mut Vec<(String, String)>,
) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            rejected.push((key.to_string(), raw));
            None
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    // Build configuration from any key/value source, falling back to defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Config::default();
        let mut rejected = Vec::new();

        // Web Interface
        if let Some(address) = lookup("LAB_ADDRESS") {
            config.web_address = address;
        }
        if let Some(port) = parse_var(&lookup, "LAB_PORT", &mut rejected) {
            config.web_port = port;
        }

        // Hashing demo
        if let Some(cost) = parse_var(&lookup, "BCRYPT_COST", &mut rejected) {
            config.bcrypt_cost = cost;
        }
        if let Some(memory_cost) = parse_var(&lookup, "ARGON2_MEMORY_COST", &mut rejected) {
            config.argon2_memory_cost = memory_cost;
        }
        if let Some(time_cost) = parse_var(&lookup, "ARGON2_TIME_COST", &mut rejected) {
            config.argon2_time_cost = time_cost;
        }
        if let Some(parallelism) = parse_var(&lookup, "ARGON2_PARALLELISM", &mut rejected) {
            config.argon2_parallelism = parallelism;
        }

        // Generation and improvement
        if let Some(length) = parse_var(&lookup, "DEFAULT_PASSWORD_LENGTH", &mut rejected) {
            config.default_password_length = length;
        }
        if let Some(top_n) = parse_var(&lookup, "IMPROVE_TOP_N", &mut rejected) {
            config.improve_top_n = top_n;
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match parse_log_level(&level) {
                Some(filter) => config.log_level = filter,
                None => rejected.push(("LOG_LEVEL".to_string(), level)),
            }
        }
        if let Some(file) = lookup("LOG_FILE").filter(|f| !f.trim().is_empty()) {
            config.log_file = Some(PathBuf::from(file));
        }

        config.rejected = rejected;
        config
    }

    // Loading happens before the logger exists, so rejected values are reported afterwards
    pub fn log_rejected(&self) {
        for (key, value) in &self.rejected {
            log::warn!("Ignoring unparseable {}='{}', using the default", key, value);
        }
    }

    pub fn hash_params(&self) -> HashParams {
        HashParams {
            bcrypt_cost: self.bcrypt_cost,
            argon2_memory_cost: self.argon2_memory_cost,
            argon2_time_cost: self.argon2_time_cost,
            argon2_parallelism: self.argon2_parallelism,
            ..HashParams::default()
        }
    }
}
