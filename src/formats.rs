//! Format trait and implementations for different document sources.
//!
//! This module defines the `Format` trait which abstracts over the encodings a host document
//! can arrive in, each producing the same [`Document`] tree for resolution.

use crate::document::Document;
use crate::error::Result;

pub mod json;

/// A source encoding that can be parsed into a [`Document`].
pub trait Format {
    /// File suffix conventionally used by this format.
    fn file_extension(&self) -> &'static str;

    /// Build a document tree from source text.
    ///
    /// # Errors
    ///
    /// Returns an error when the source does not describe a valid document.
    fn parse(&self, source: &str) -> Result<Document>;
}
