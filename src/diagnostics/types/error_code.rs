//! The error code record that every syntax error constant fills in

use serde::Serialize;

/// Which phase of the front end produced a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorType {
    Lexer,
    Parser,
}

impl ErrorType {
    /// Returns the prefix string used in error headers
    pub fn prefix(&self) -> &'static str {
        match self {
            ErrorType::Lexer => "Lexer error",
            ErrorType::Parser => "Syntax error",
        }
    }
}

/// Error code with message template and optional hint
#[derive(Debug, Clone, Copy)]
pub struct ErrorCode {
    pub code: &'static str,
    pub title: &'static str,
    pub error_type: ErrorType,
    pub message: &'static str,
    pub hint: Option<&'static str>,
}
