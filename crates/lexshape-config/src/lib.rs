use std::env;

use lexshape_types::OutputMode;
use serde::{Deserialize, Serialize};

use self::logging::LoggingConfig;

pub mod logging;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output shape used when the command line does not pick one
    pub mode: OutputMode,
    pub logging: LoggingConfig,
}

impl Config {
    /// Read configuration from the process environment
    pub fn new() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load a `.env` file if one exists, then read the environment
    pub fn load() -> Self {
        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!("Loaded environment from {}", path.display()),
            Err(e) if e.not_found() => {}
            Err(e) => tracing::warn!("Ignoring unreadable .env file: {e}"),
        }
        Self::new()
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mode = match lookup("LEXSHAPE_MODE") {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                tracing::warn!("{e}, falling back to {}", OutputMode::default());
                OutputMode::default()
            }),
            None => OutputMode::default(),
        };

        Config {
            mode,
            logging: LoggingConfig::from_lookup(&lookup),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::logging::LogFormat;

    fn lookup_in(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_in(&[]));
        assert_eq!(config.mode, OutputMode::Mapping);
        assert_eq!(config.logging.format, LogFormat::Text);
        assert_eq!(config.logging.filter, "info");
    }

    #[test]
    fn test_mode_from_env() {
        let config = Config::from_lookup(lookup_in(&[("LEXSHAPE_MODE", "list")]));
        assert_eq!(config.mode, OutputMode::List);
    }

    #[test]
    fn test_bad_mode_falls_back() {
        let config = Config::from_lookup(lookup_in(&[("LEXSHAPE_MODE", "tree")]));
        assert_eq!(config.mode, OutputMode::Mapping);
    }

    #[test]
    fn test_logging_from_env() {
        let config = Config::from_lookup(lookup_in(&[
            ("LEXSHAPE_LOG_FORMAT", "json"),
            ("RUST_LOG", "lexshape_core=debug"),
        ]));
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.filter, "lexshape_core=debug");
    }
}
