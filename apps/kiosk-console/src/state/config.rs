//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`KIOSK_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Store name (shown in the greeting and under each order view)
    pub store_name: String,

    /// How responses are written to stdout
    pub output: OutputFormat,

    /// Prompt printed before each command in text mode
    pub prompt: String,
}

/// Output format of the console.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable tables
    #[default]
    Text,

    /// One JSON document per response, for scripting
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidValue("KIOSK_OUTPUT".to_string())),
        }
    }
}

impl Default for ConfigState {
    /// Returns default configuration suitable for development.
    ///
    /// ## Default Values
    /// - Store: "Kiosk POS"
    /// - Output: text
    /// - Prompt: "> "
    fn default() -> Self {
        ConfigState {
            store_name: "Kiosk POS".to_string(),
            output: OutputFormat::Text,
            prompt: "> ".to_string(),
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `KIOSK_STORE_NAME`: Override store name
    /// - `KIOSK_OUTPUT`: `text` or `json`
    /// - `KIOSK_PROMPT`: Override the prompt
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key/value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(store_name) = lookup("KIOSK_STORE_NAME") {
            if store_name.trim().is_empty() {
                return Err(ConfigError::InvalidValue("KIOSK_STORE_NAME".to_string()));
            }
            config.store_name = store_name;
        }

        if let Some(output) = lookup("KIOSK_OUTPUT") {
            config.output = output.parse()?;
        }

        if let Some(prompt) = lookup("KIOSK_PROMPT") {
            config.prompt = prompt;
        }

        Ok(config)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
