//! Error types for the registry.
//!
//! None of these are fatal to a mint: store and validation failures are
//! logged and the registry carries on in memory.

use thiserror::Error;

/// Errors raised when installing custom name word lists.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ComposerError {
    #[error("{0} name list is empty")]
    EmptyList(&'static str),
}

/// Errors surfaced by state store implementations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),
}

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Errors raised when installing a custom race program or track directory.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("race program is empty")]
    NoRaces,

    #[error("track directory is empty")]
    NoTracks,

    #[error("track {0:?} has no goings")]
    NoGoings(String),
}
