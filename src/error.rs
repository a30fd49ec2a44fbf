//! Error types.
//!
//! Conflict detection itself is infallible; errors only arise when loading
//! configuration or mutating a [`crate::store::LoadStore`].

use std::path::PathBuf;

/// Errors raised while loading a [`crate::config::DetectorConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Errors raised by [`crate::store::LoadStore`] mutations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("load ID must not be empty")]
    EmptyId,
    #[error("load '{0}' already exists")]
    DuplicateId(String),
    #[error("load '{0}' not found")]
    NotFound(String),
}
