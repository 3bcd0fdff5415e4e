// src/logging/mod.rs
use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;

use thiserror::Error;

use crate::core::config::Config;

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Logger already initialised: {0}")]
    AlreadyInitialized(String),
}

pub type Result<T> = std::result::Result<T, LoggingError>;

// Open (append) the log file, creating parent directories as needed
fn open_log_file(path: &Path) -> Result<fs::File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(OpenOptions::new().create(true).append(true).open(path)?)
}

/// Builder configured from the lab config: level, second-resolution
/// timestamps, module paths, and an optional file target instead of stderr.
pub fn build_logger(config: &Config) -> Result<env_logger::Builder> {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .format_module_path(true)
        .format_target(false);

    if let Some(path) = &config.log_file {
        let file = open_log_file(path)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    Ok(builder)
}

/// Install the global logger. Call once at startup.
pub fn init(config: &Config) -> Result<()> {
    build_logger(config)?
        .try_init()
        .map_err(|e| LoggingError::AlreadyInitialized(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_target_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("lab.log");
        let config = Config {
            log_file: Some(path.clone()),
            ..Config::default()
        };

        let logger = build_logger(&config).unwrap().build();
        assert!(path.exists());
        assert_eq!(logger.filter(), log::LevelFilter::Info);
    }

    #[test]
    fn stderr_target_without_file() {
        let config = Config {
            log_level: log::LevelFilter::Warn,
            ..Config::default()
        };
        let logger = build_logger(&config).unwrap().build();
        assert_eq!(logger.filter(), log::LevelFilter::Warn);
    }
}
