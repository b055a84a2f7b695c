use serde::Serialize;
use thiserror::Error;

use crate::diagnostics::position::{Position, Span};
use crate::diagnostics::{
    Diagnostic, INVALID_CHAR_LITERAL, INVALID_CHARACTER, INVALID_ESCAPE, UNTERMINATED_CHAR,
    UNTERMINATED_COMMENT, UNTERMINATED_STRING,
};

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum LexErrorKind {
    #[error("invalid character `{0}`")]
    InvalidCharacter(char),
    #[error("unterminated string literal")]
    UnterminatedString { triple_quoted: bool },
    #[error("unterminated character literal")]
    UnterminatedChar,
    #[error("unterminated block comment")]
    UnterminatedComment,
    #[error("invalid escape sequence `{0}`")]
    InvalidEscape(String),
    #[error("character literal with {0} characters")]
    InvalidCharLiteral(usize),
}

/// A recoverable lexical error. The offending text still becomes a token.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{kind} at {position}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
    pub position: Position,
}

impl LexError {
    pub fn to_diagnostic(&self) -> Diagnostic {
        let (spec, value) = match &self.kind {
            LexErrorKind::InvalidCharacter(ch) => (&INVALID_CHARACTER, ch.escape_debug().to_string()),
            LexErrorKind::UnterminatedString { triple_quoted } => {
                let quote = if *triple_quoted { "\"\"\"" } else { "\"" };
                (&UNTERMINATED_STRING, quote.to_string())
            }
            LexErrorKind::UnterminatedChar => (&UNTERMINATED_CHAR, String::new()),
            LexErrorKind::UnterminatedComment => (&UNTERMINATED_COMMENT, String::new()),
            LexErrorKind::InvalidEscape(text) => (&INVALID_ESCAPE, text.clone()),
            LexErrorKind::InvalidCharLiteral(count) => (&INVALID_CHAR_LITERAL, count.to_string()),
        };
        Diagnostic::make_error(spec, &[&value], self.span, self.position)
    }
}
