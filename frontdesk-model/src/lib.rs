//! Record model shared by every front-desk list screen.
//!
//! Defines the schema-free types the grid engines, the cache and the data
//! collaborators agree on:
//! - [`Record`] — one table row (id, collection, JSON payload, timestamps)
//! - [`FieldPath`] — a dot-delimited address into a record's payload
//! - [`FieldSource`] — anything a [`FieldPath`] can be resolved against
//!
//! Nothing here knows about patients, appointments or medicines. Screens pick
//! field paths; the engines only ever see resolved JSON values.

mod path;
mod record;

pub use path::{FieldPath, FieldSource, Segment};
pub use record::Record;

/// Result type alias using the crate's error type.
pub type ModelResult<T> = std::result::Result<T, ModelError>;

/// Errors that can occur while building or decoding records.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A record payload that is not a JSON object; carries the JSON kind found.
    #[error("record payload must be a JSON object, got {0}")]
    NotAnObject(&'static str),
}

impl ModelError {
    /// Rejection for a payload that is not a JSON object.
    #[must_use]
    pub fn not_an_object(value: &serde_json::Value) -> Self {
        Self::NotAnObject(record::json_kind(value))
    }
}
