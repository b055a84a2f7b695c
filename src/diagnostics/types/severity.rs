//! Diagnostic severity levels

use serde::Serialize;

/// Severity level of a diagnostic message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Error: the input is not valid Elm
    Error,
    /// Warning: the input parsed but looks suspicious
    Warning,
}
