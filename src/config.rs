//! Explorer configuration
//!
//! Initial inputs, window settings and the default log filter. Loaded from a
//! JSON file, optionally located through the environment.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::{ExplorerError, ExplorerResult, Inputs};

/// Environment variable naming a JSON config file
pub const CONFIG_PATH_VAR: &str = "MONEYNESS_CONFIG";
/// Environment variable overriding the default log filter
pub const LOG_FILTER_VAR: &str = "MONEYNESS_LOG";

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    /// Inputs the explorer starts from
    pub initial: Inputs,
    /// Desktop window settings
    pub gui: GuiConfig,
    /// Filter used when `RUST_LOG` is not set
    pub log_filter: String,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            initial: Inputs::default(),
            gui: GuiConfig::default(),
            log_filter: "info".to_string(),
        }
    }
}

/// Desktop window settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuiConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
}

impl Default for GuiConfig {
    fn default() -> Self {
        Self {
            width: 960.0,
            height: 720.0,
            title: "Option Moneyness Explorer".to_string(),
        }
    }
}

impl ExplorerConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> ExplorerResult<Self> {
        let config: ExplorerConfig = serde_json::from_str(json)
            .map_err(|e| ExplorerError::config(format!("invalid config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON config file
    pub fn from_file(path: impl AsRef<Path>) -> ExplorerResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Self::from_json(&json)
    }

    /// Defaults, or the file named by `MONEYNESS_CONFIG`, with the log filter
    /// overridden by `MONEYNESS_LOG`. Reads `.env` first if present.
    pub fn from_env() -> ExplorerResult<Self> {
        Self::load(None)
    }

    /// Like [`ExplorerConfig::from_env`], but an explicit `path` takes the
    /// place of `MONEYNESS_CONFIG`. The `MONEYNESS_LOG` override still applies.
    pub fn load(path: Option<&Path>) -> ExplorerResult<Self> {
        dotenvy::dotenv().ok();

        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => match std::env::var(CONFIG_PATH_VAR) {
                Ok(path) if !path.trim().is_empty() => Self::from_file(path.trim())?,
                _ => Self::default(),
            },
        };

        if let Ok(filter) = std::env::var(LOG_FILTER_VAR) {
            if !filter.trim().is_empty() {
                config.log_filter = filter.trim().to_string();
            }
        }

        Ok(config)
    }

    pub fn validate(&self) -> ExplorerResult<()> {
        self.initial.validate()?;
        if !(self.gui.width > 0.0 && self.gui.height > 0.0) {
            return Err(ExplorerError::config(format!(
                "window size must be positive, got {}x{}",
                self.gui.width, self.gui.height
            )));
        }
        Ok(())
    }
}
