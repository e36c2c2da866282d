//! Error types for the data layer.

use crate::collection::Collection;
use thiserror::Error;

/// Result type for data operations.
pub type DataResult<T> = Result<T, DataError>;

/// Errors surfaced by collaborators and the repository.
#[derive(Debug, Error)]
pub enum DataError {
    /// No record with this id in the collection.
    #[error("record not found: {collection}/{id}")]
    NotFound { collection: Collection, id: String },

    /// The backend failed or was unreachable.
    #[error("backend error: {0}")]
    Backend(String),

    /// The payload could not be turned into a record.
    #[error("invalid data: {0}")]
    InvalidData(#[from] frontdesk_model::ModelError),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A collection name that is not one of [`Collection`]'s.
    #[error("unknown collection: {0}")]
    UnknownCollection(String),
}

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while reading `frontdesk.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
}
