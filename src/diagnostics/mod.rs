//! Diagnostics module.
//!
//! Provides structured diagnostics with severity, optional error codes, source spans,
//! and rendering helpers shared by the lexer, the parser and the CLI.

pub mod aggregator;
pub mod diagnostic;
pub mod format;
pub mod position;
pub mod rendering;
pub mod syntax_errors;
pub mod types;

pub use aggregator::{
    DEFAULT_MAX_ERRORS, DiagnosticCounts, DiagnosticsAggregator, DiagnosticsReport,
    render_diagnostics_multi,
};
pub use diagnostic::Diagnostic;
pub use format::format_message;
pub use rendering::{render_diagnostics, render_display_path};
pub use types::{ErrorCode, ErrorType, Severity};

pub use syntax_errors::*;
