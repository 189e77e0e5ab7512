//! Structured error types for data sources and configuration.

use std::path::PathBuf;

use thiserror::Error;

use crate::model::{Cursor, ItemId};

/// Failure of a children or content fetch.
///
/// The sidebar logs these and clears its loading flags; nothing is retried.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SourceError {
    #[error("data source unavailable: {0}")]
    Unavailable(String),

    #[error("item not found: {id}")]
    NotFound { id: ItemId },

    #[error("cursor {cursor} does not belong to parent {parent}")]
    InvalidCursor { parent: ItemId, cursor: Cursor },
}

/// Failure to load or validate a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}
