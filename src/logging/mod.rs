// src/logging/mod.rs
use std::fs::OpenOptions;
use std::io;
use std::path::Path;

use log::LevelFilter;
use thiserror::Error;

use crate::core::config::Config;

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("Logger already initialized: {0}")]
    AlreadyInitialized(#[from] log::SetLoggerError),
}

pub type Result<T> = std::result::Result<T, LoggingError>;

/// Install the global logger. Output goes to the configured log file; if that
/// file cannot be opened we fall back to stderr at warn level so the terminal
/// UI is not flooded.
pub fn init(config: &Config) -> Result<()> {
    let (target, level) = log_target(config);
    let mut builder = builder(level);
    builder.target(target);

    builder.try_init()?;
    log::info!("🔐 PassForge starting, logging to {}", config.log_file.display());

    Ok(())
}

fn builder(level: LevelFilter) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .format_timestamp_secs()
        .format_module_path(true)
        .format_target(false);
    builder
}

fn log_target(config: &Config) -> (env_logger::Target, LevelFilter) {
    match open_log_file(&config.log_file) {
        Ok(file) => (env_logger::Target::Pipe(Box::new(file)), config.log_level),
        Err(e) => {
            eprintln!("Could not open log file {}: {}", config.log_file.display(), e);
            (env_logger::Target::Stderr, config.log_level.min(LevelFilter::Warn))
        }
    }
}

fn open_log_file(path: &Path) -> io::Result<std::fs::File> {
    crate::utils::ensure_parent_dir(path)?;
    OpenOptions::new().create(true).append(true).open(path)
}
