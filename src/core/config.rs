// src/core/config.rs
use std::env;
use std::fmt;
use log::LevelFilter;

use crate::cli::Args;
use crate::generators::password::{validate_length, DEFAULT_SPECIAL_CHARS};

// Configuration for the password generator service
#[derive(Clone)]
pub struct Config {
    // Web Interface
    pub web_address: String,
    pub web_port: u16,
    pub secret_key: Option<String>,

    // Password Generation
    pub default_password_length: usize,
    pub default_special_chars: usize,

    // Logging
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Web Interface
            web_address: "0.0.0.0".to_string(),
            web_port: 5000,
            secret_key: None,

            // Password Generation
            default_password_length: 12,
            default_special_chars: DEFAULT_SPECIAL_CHARS,

            // Logging
            log_level: LevelFilter::Info,
        }
    }
}

// The secret key must never end up in logs
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("web_address", &self.web_address)
            .field("web_port", &self.web_port)
            .field("secret_key", &self.secret_key.as_ref().map(|_| "<redacted>"))
            .field("default_password_length", &self.default_password_length)
            .field("default_special_chars", &self.default_special_chars)
            .field("log_level", &self.log_level)
            .finish()
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup, starting from the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        // Web Interface
        if let Some(val) = lookup("PORT") {
            match val.parse() {
                Ok(port) => config.web_port = port,
                Err(_) => log::warn!("Invalid PORT '{}', using {}", val, config.web_port),
            }
        }

        if let Some(address) = lookup("HOST") {
            config.web_address = address;
        }

        if let Some(key) = lookup("SECRET_KEY") {
            if !key.trim().is_empty() {
                config.secret_key = Some(key);
            }
        }

        // Password Generation
        if let Some(val) = lookup("DEFAULT_PASSWORD_LENGTH") {
            match val.parse::<usize>() {
                Ok(length) => match validate_length(length) {
                    Ok(()) => config.default_password_length = length,
                    Err(e) => log::warn!("Ignoring DEFAULT_PASSWORD_LENGTH: {}", e),
                },
                Err(_) => log::warn!("Invalid DEFAULT_PASSWORD_LENGTH '{}', ignoring", val),
            }
        }

        if let Some(val) = lookup("DEFAULT_SPECIAL_CHARS") {
            match val.parse() {
                Ok(count) => config.default_special_chars = count,
                Err(_) => log::warn!("Invalid DEFAULT_SPECIAL_CHARS '{}', ignoring", val),
            }
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => log::warn!("Unknown log level '{}', using {}", level, config.log_level),
            }
        }

        config
    }

    /// Command line flags win over the environment.
    pub fn apply_args(mut self, args: &Args) -> Self {
        if let Some(port) = args.port {
            self.web_port = port;
        }
        if let Some(host) = &args.host {
            self.web_address = host.clone();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_environment() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config.web_port, 5000);
        assert_eq!(config.web_address, "0.0.0.0");
        assert!(config.secret_key.is_none());
        assert_eq!(config.default_password_length, 12);
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = Config::from_lookup(lookup_from(&[
            ("PORT", "8080"),
            ("SECRET_KEY", "hunter2"),
            ("DEFAULT_PASSWORD_LENGTH", "20"),
            ("LOG_LEVEL", "DEBUG"),
        ]));
        assert_eq!(config.web_port, 8080);
        assert_eq!(config.secret_key.as_deref(), Some("hunter2"));
        assert_eq!(config.default_password_length, 20);
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn unparsable_values_are_ignored() {
        let config = Config::from_lookup(lookup_from(&[("PORT", "not-a-port"), ("SECRET_KEY", "  ")]));
        assert_eq!(config.web_port, 5000);
        assert!(config.secret_key.is_none());
    }

    #[test]
    fn out_of_range_default_length_is_ignored() {
        for value in ["2", "500"] {
            let config = Config::from_lookup(lookup_from(&[("DEFAULT_PASSWORD_LENGTH", value)]));
            assert_eq!(config.default_password_length, 12);
        }
    }

    #[test]
    fn debug_output_redacts_secret_key() {
        let config = Config::from_lookup(lookup_from(&[("SECRET_KEY", "hunter2")]));
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn args_override_environment() {
        let args = Args { port: Some(9000), host: Some("127.0.0.1".to_string()) };
        let config = Config::from_lookup(lookup_from(&[("PORT", "8080")])).apply_args(&args);
        assert_eq!(config.web_port, 9000);
        assert_eq!(config.web_address, "127.0.0.1");
    }
}
