//! Structured warnings raised during resolution and the sinks that receive them.

use crate::degree::HeadingDegree;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Raised when a heading is given `min > max`.
///
/// Non-fatal: resolution carries on with the bounds exactly as given.
pub struct ConfigurationWarning {
    /// The `min` that was supplied.
    pub min: HeadingDegree,
    /// The `max` that was supplied.
    pub max: HeadingDegree,
}

impl fmt::Display for ConfigurationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid heading bounds: must meet requirement `min` <= `max` (got min = {}, max = {})",
            self.min, self.max
        )
    }
}

/// Receives warnings so the host application decides where they go.
pub trait DiagnosticSink {
    /// Accept one warning.
    fn report(&mut self, warning: ConfigurationWarning);
}

/// Routes warnings to the `log` facade at warn level.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&mut self, warning: ConfigurationWarning) {
        log::warn!("{warning}");
    }
}

impl DiagnosticSink for Vec<ConfigurationWarning> {
    fn report(&mut self, warning: ConfigurationWarning) {
        self.push(warning);
    }
}
