use std::path::PathBuf;

use thiserror::Error;

/// Failures at the fallible edges of the crate.
///
/// Key resolution and buffer editing never fail; only building tables,
/// loading configuration and touching the preference store can.
#[derive(Debug, Error)]
pub enum Error {
    #[error("key table needs at least one language")]
    NoLanguages,

    #[error("key `{0}` is defined more than once")]
    DuplicateKey(String),

    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid preference file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
