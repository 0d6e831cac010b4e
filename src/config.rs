use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::resolver::DEFAULT_NATIVE_KEYS;

/// Engine settings, loadable from TOML.
///
/// ```toml
/// native_keys = []
/// preference_key = "vkbd.language"
/// default_language = 1
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Keys a physical key-down leaves to the host's native text widget.
    pub native_keys: Vec<String>,
    /// Preference-store key holding the active language code.
    pub preference_key: String,
    /// Language used when nothing valid is stored.
    pub default_language: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            native_keys: DEFAULT_NATIVE_KEYS.iter().map(|s| s.to_string()).collect(),
            preference_key: "vkbd.language".to_string(),
            default_language: 0,
        }
    }
}

impl EngineConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::info!("Loaded keyboard config from {}", path.display());
        Ok(config)
    }
}
