//! smart-heading: heading levels inferred from where a heading sits in its document.
//!
//! Authors write a single generic heading marker and the library works out whether it should
//! render as `<h1>` or `<h4>` by walking up the document tree and counting the heading groups
//! it is nested under, within per-heading `min` and `max` bounds.
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod degree;
pub mod diagnostics;
pub mod document;
pub mod error;
pub mod formats;
pub mod heading;
pub mod input;
pub mod render;
pub mod resolver;
pub mod tree;
pub mod walker;

pub use degree::{HeadingDegree, ResolutionBounds};
pub use diagnostics::{ConfigurationWarning, DiagnosticSink, LogSink};
pub use document::Document;
pub use error::{Error, Result};
pub use heading::{RenderTrigger, SmartHeading};
pub use resolver::DegreeResolver;
pub use tree::DocumentTree;
pub use walker::AncestorWalker;
