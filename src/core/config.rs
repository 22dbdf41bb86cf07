// src/core/config.rs
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use log::LevelFilter;

use crate::generators::password::DEFAULT_MAX_ATTEMPTS;
use crate::models::PasswordOptions;

// Configuration for the password generator
#[derive(Debug, Clone)]
pub struct Config {
    // Password Generation defaults
    pub default_password_length: usize,
    pub default_include_lowercase: bool,
    pub default_include_uppercase: bool,
    pub default_include_numbers: bool,
    pub default_include_symbols: bool,
    pub default_exclude_ambiguous: bool,

    // Randomness
    pub max_shuffle_attempts: usize,
    pub allow_weak_random: bool,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Password Generation defaults
            default_password_length: 16,
            default_include_lowercase: true,
            default_include_uppercase: true,
            default_include_numbers: true,
            default_include_symbols: true,
            default_exclude_ambiguous: false,

            // Randomness
            max_shuffle_attempts: DEFAULT_MAX_ATTEMPTS,
            allow_weak_random: false,

            // Logging
            log_level: LevelFilter::Warn,
            log_file: None,
        }
    }
}

// Parse an environment variable, keeping the current value when unset or invalid
fn read_env<T: FromStr>(key: &str, target: &mut T) {
    if let Ok(val) = env::var(key) {
        match val.trim().parse() {
            Ok(parsed) => *target = parsed,
            Err(_) => log::warn!("Ignoring invalid value '{}' for {}", val, key),
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        let mut config = Config::default();

        // Password Generation defaults
        read_env("DEFAULT_PASSWORD_LENGTH", &mut config.default_password_length);
        read_env("DEFAULT_INCLUDE_LOWERCASE", &mut config.default_include_lowercase);
        read_env("DEFAULT_INCLUDE_UPPERCASE", &mut config.default_include_uppercase);
        read_env("DEFAULT_INCLUDE_NUMBERS", &mut config.default_include_numbers);
        read_env("DEFAULT_INCLUDE_SYMBOLS", &mut config.default_include_symbols);
        read_env("DEFAULT_EXCLUDE_AMBIGUOUS", &mut config.default_exclude_ambiguous);

        // Randomness
        read_env("MAX_SHUFFLE_ATTEMPTS", &mut config.max_shuffle_attempts);
        read_env("ALLOW_WEAK_RANDOM", &mut config.allow_weak_random);

        // Logging
        if let Ok(level) = env::var("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "off" => config.log_level = LevelFilter::Off,
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => log::warn!("Unknown log level '{}', using {}", level, config.log_level),
            }
        }

        if let Ok(file) = env::var("LOG_FILE") {
            if !file.trim().is_empty() {
                config.log_file = Some(PathBuf::from(file));
            }
        }

        config
    }

    // Options seeded from the configured defaults
    pub fn default_options(&self) -> PasswordOptions {
        PasswordOptions {
            length: self.default_password_length,
            include_lowercase: self.default_include_lowercase,
            include_uppercase: self.default_include_uppercase,
            include_numbers: self.default_include_numbers,
            include_symbols: self.default_include_symbols,
            exclude_ambiguous: self.default_exclude_ambiguous,
            exclude_characters: String::new(),
            custom_characters: String::new(),
        }
    }
}
