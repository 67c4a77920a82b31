// src/core/config.rs
use std::env;
use std::path::PathBuf;
use log::LevelFilter;

use crate::models::PasswordGenerationOptions;

// Configuration for the password generator
#[derive(Debug, Clone)]
pub struct Config {
    // Password Generation
    pub default_password_length: usize,
    pub include_numbers: bool,
    pub include_letters: bool,
    pub include_special: bool,

    // Storage
    pub store_path: PathBuf,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        let defaults = PasswordGenerationOptions::default();
        let data_dir = crate::utils::get_app_data_dir().unwrap_or_else(|| PathBuf::from("."));

        Self {
            // Password Generation
            default_password_length: defaults.length,
            include_numbers: defaults.include_numbers,
            include_letters: defaults.include_letters,
            include_special: defaults.include_special,

            // Storage
            store_path: data_dir.join("storage.json"),

            // Logging
            log_level: LevelFilter::Info,
            log_file: data_dir.join("passforge.log"),
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any variable source; unparseable values keep the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        // Password Generation
        if let Some(val) = lookup("PASSFORGE_DEFAULT_LENGTH") {
            match val.parse() {
                Ok(length) => config.default_password_length = length,
                Err(_) => log::warn!("Invalid PASSFORGE_DEFAULT_LENGTH '{}', keeping default", val),
            }
        }

        for (key, target) in [
            ("PASSFORGE_INCLUDE_NUMBERS", &mut config.include_numbers),
            ("PASSFORGE_INCLUDE_LETTERS", &mut config.include_letters),
            ("PASSFORGE_INCLUDE_SPECIAL", &mut config.include_special),
        ] {
            if let Some(val) = lookup(key) {
                match parse_flag(&val) {
                    Some(flag) => *target = flag,
                    None => log::warn!("Invalid {} '{}', keeping default", key, val),
                }
            }
        }

        // Storage
        if let Some(path) = lookup("PASSFORGE_STORE") {
            config.store_path = PathBuf::from(path);
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "off" => config.log_level = LevelFilter::Off,
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => {}
            }
        }

        if let Some(file) = lookup("LOG_FILE") {
            config.log_file = PathBuf::from(file);
        }

        config
    }

    /// Initial form inputs.
    pub fn generation_options(&self) -> PasswordGenerationOptions {
        PasswordGenerationOptions {
            length: self.default_password_length,
            include_numbers: self.include_numbers,
            include_letters: self.include_letters,
            include_special: self.include_special,
        }
    }
}

fn parse_flag(val: &str) -> Option<bool> {
    match val.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
