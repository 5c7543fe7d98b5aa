/*!
 * Application configuration module
 *
 * This module handles the application configuration including loading and
 * validating configuration settings.
 */

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::language_utils;

/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Application key for the translation backend
    pub appkey: String,

    /// Application secret for the translation backend
    pub secret: String,

    /// Alias table mapping caller-facing language codes to backend codes
    /// (e.g. `zh` -> `zh-CHS`)
    #[serde(default)]
    pub transform: HashMap<String, String>,

    /// Translation backend endpoint URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_endpoint() -> String {
    "https://openapi.youdao.com/api".to_string()
}

impl Config {
    /// Load the configuration from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file =
            File::open(path).with_context(|| format!("Failed to open config file: {:?}", path))?;

        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Validate the configuration after loading.
    pub fn validate(&self) -> Result<()> {
        if self.appkey.is_empty() {
            return Err(anyhow!("Translation backend `appkey` is required"));
        }
        if self.secret.is_empty() {
            return Err(anyhow!("Translation backend `secret` is required"));
        }

        // Every alias must resolve to a code the backend accepts.
        for (from, to) in &self.transform {
            if !language_utils::is_supported(to) {
                return Err(anyhow!(
                    "Alias target `{}` (for `{}`) is not a supported language code",
                    to,
                    from
                ));
            }
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            appkey: String::new(),
            secret: String::new(),
            transform: HashMap::new(),
            endpoint: default_endpoint(),
            log_level: LogLevel::default(),
        }
    }
}
