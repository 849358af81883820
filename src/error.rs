//! Errors raised while loading configuration and documents.
//!
//! Degree resolution itself never fails: everything here belongs to the surfaces around it.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
/// Failure modes for reading, parsing and configuring documents.
pub enum Error {
    /// File system access failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The document was not valid JSON or did not match the node schema.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A heading degree outside 1 to 6 was supplied.
    #[error("invalid heading degree {0}: must be between 1 and 6")]
    InvalidDegree(i64),

    /// A `min` or `max` attribute could not be read as a number.
    #[error("invalid `{name}` attribute {value:?} on heading marker")]
    InvalidAttribute {
        /// Attribute name (`min` or `max`).
        name: String,
        /// Raw attribute text.
        value: String,
    },

    /// The configuration file could not be deserialised.
    #[error("configuration error: {0}")]
    Config(String),

    /// The document tree is structurally unusable.
    #[error("malformed document: {0}")]
    Malformed(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
