// src/core/config.rs
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use log::LevelFilter;

use crate::analysis::DEFAULT_GUESSES_PER_SECOND;

// Configuration for the strength service and the meter front-end
#[derive(Debug, Clone)]
pub struct Config {
    // Web Interface
    pub web_address: String,
    pub web_port: u16,

    // Meter front-end
    pub backend_url: String,
    pub backend_timeout: Duration,
    pub toast_duration: Duration,
    pub discard_stale_responses: bool,
    pub preferences_file: Option<PathBuf>,

    // Password Generation
    pub default_password_length: usize,

    // Crack-time estimation
    pub guesses_per_second: f64,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Web Interface
            web_address: "127.0.0.1".to_string(),
            web_port: 5000,

            // Meter front-end
            backend_url: "http://127.0.0.1:5000".to_string(),
            backend_timeout: Duration::from_millis(5000),
            toast_duration: Duration::from_millis(2000),
            discard_stale_responses: true,
            preferences_file: None, // Will be initialized in load()

            // Password Generation
            default_password_length: 16,

            // Crack-time estimation
            guesses_per_second: DEFAULT_GUESSES_PER_SECOND,

            // Logging
            log_level: LevelFilter::Info,
            log_file: PathBuf::from("./logs/passmeter.log"),
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        let mut config = Config::default();

        config.preferences_file = crate::utils::default_preferences_file();

        // Web Interface
        if let Ok(address) = env::var("WEB_ADDRESS") {
            config.web_address = address;
        }

        if let Ok(val) = env::var("WEB_PORT") {
            if let Ok(port) = val.parse() {
                config.web_port = port;
            }
        }

        // Meter front-end
        if let Ok(url) = env::var("BACKEND_URL") {
            config.backend_url = url.trim_end_matches('/').to_string();
        }

        if let Ok(val) = env::var("BACKEND_TIMEOUT_MS") {
            match val.parse::<u64>() {
                Ok(millis) if millis > 0 => config.backend_timeout = Duration::from_millis(millis),
                _ => log::warn!("Ignoring invalid BACKEND_TIMEOUT_MS '{}'", val),
            }
        }

        if let Ok(val) = env::var("TOAST_DURATION_MS") {
            if let Ok(millis) = val.parse::<u64>() {
                config.toast_duration = Duration::from_millis(millis);
            }
        }

        if let Ok(val) = env::var("DISCARD_STALE_RESPONSES") {
            if let Ok(discard) = val.parse() {
                config.discard_stale_responses = discard;
            }
        }

        if let Ok(file) = env::var("PREFERENCES_FILE") {
            config.preferences_file = Some(PathBuf::from(file));
        }

        // Password Generation
        if let Ok(val) = env::var("DEFAULT_PASSWORD_LENGTH") {
            if let Ok(length) = val.parse() {
                config.default_password_length = length;
            }
        }

        // Crack-time estimation
        if let Ok(val) = env::var("GUESSES_PER_SECOND") {
            match val.parse::<f64>() {
                Ok(rate) if rate > 0.0 => config.guesses_per_second = rate,
                _ => log::warn!("Ignoring invalid GUESSES_PER_SECOND '{}'", val),
            }
        }

        // Logging
        if let Ok(level) = env::var("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => {}
            }
        }

        if let Ok(file) = env::var("LOG_FILE") {
            config.log_file = PathBuf::from(file);
        }

        config
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.web_address.clone(), self.web_port)
    }

    // Create directories needed for operation
    pub fn ensure_directories_exist(&self) {
        if let Some(parent) = self.log_file.parent() {
            if !parent.exists() {
                if let Err(e) = std::fs::create_dir_all(parent) {
                    log::warn!("Failed to create log directory: {}", e);
                }
            }
        }

        if let Some(parent) = self.preferences_file.as_ref().and_then(|p| p.parent()) {
            if !parent.exists() {
                if let Err(e) = std::fs::create_dir_all(parent) {
                    log::warn!("Failed to create preferences directory: {}", e);
                }
            }
        }
    }
}
