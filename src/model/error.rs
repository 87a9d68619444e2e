//! Error types for patternkit.
//!
//! Interaction handlers never fail: out-of-range requests degrade to no-ops
//! or clamps. Errors exist only at the edges (config, catalog files, logging,
//! terminal) and compose into [`AppError`] via `From` so `main` can use `?`.

use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigError;
use crate::logging::LoggingError;
use crate::model::{InvalidItemId, InvalidNodeId, ItemId};

/// Top-level application error.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded or resolved.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Tracing could not be initialized.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// Item catalog could not be loaded.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Unknown story requested on the command line.
    #[error("Unknown story '{0}' (use --list-stories)")]
    UnknownStory(String),

    /// Terminal setup or rendering failed.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors building or loading an item catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// File could not be read.
    #[error("Failed to read catalog at {path}: {source}")]
    Read {
        /// Catalog path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// File is not a valid JSON item array.
    #[error("Invalid catalog JSON in {path}: {message}")]
    Json {
        /// Catalog path.
        path: PathBuf,
        /// Parser message.
        message: String,
    },

    /// Two items share an id.
    #[error("Duplicate item id '{0}'")]
    DuplicateId(ItemId),

    /// A built-in fixture produced an invalid item id.
    #[error("Invalid item id: {0}")]
    InvalidItemId(#[from] InvalidItemId),

    /// A built-in fixture produced an invalid node id.
    #[error("Invalid node id: {0}")]
    InvalidNodeId(#[from] InvalidNodeId),
}
