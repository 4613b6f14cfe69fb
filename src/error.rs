//! Error types for record construction.
//!
//! Only building a `Record` can fail. The collection operations are total:
//! "not found" and empty collections are ordinary results, not errors.

use thiserror::Error;

/// Errors raised while constructing a [`Record`](crate::Record).
#[derive(Debug, Error)]
pub enum RecordError {
    /// A token in a record literal has no `=` between name and value.
    #[error("field token '{token}' has no '=' separator")]
    MissingSeparator { token: String },

    /// A field was given with an empty name.
    #[error("field name is empty")]
    EmptyFieldName,

    /// The same field name appeared more than once.
    #[error("duplicate field '{name}'")]
    DuplicateField { name: String },

    /// A JSON record literal was not a JSON object.
    #[error("JSON record must be an object")]
    NotAnObject,

    /// A JSON object field held something other than a string.
    #[error("field '{name}' is not a string value")]
    NonStringValue { name: String },

    /// The JSON text itself failed to parse.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
