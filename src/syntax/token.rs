use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::diagnostics::position::{Position, Span};

use super::lexeme::Lexeme;
use super::token_type::TokenType;

/// One lexed token: its kind, its exact source text and where it starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub token_type: TokenType,
    pub lexeme: Lexeme,
    pub span: Span,
    pub position: Position,
}

impl Token {
    /// A token cut from `source` at `start..end`.
    pub fn lexed(
        token_type: TokenType,
        source: Arc<str>,
        start: usize,
        end: usize,
        position: Position,
    ) -> Self {
        Self {
            token_type,
            lexeme: Lexeme::shared(source, start, end),
            span: Span::new(start, end),
            position,
        }
    }

    /// An empty token at `offset` that no source text backs, like the `Eof`
    /// the parser appends to a hand-built token stream.
    pub fn synthetic(token_type: TokenType, offset: usize, position: Position) -> Self {
        Self {
            token_type,
            lexeme: Lexeme::from(""),
            span: Span::empty(offset),
            position,
        }
    }

    pub fn text(&self) -> &str {
        self.lexeme.as_str()
    }

    /// True when nothing, not even whitespace, separates `self` from `next`.
    pub fn touches(&self, next: &Token) -> bool {
        self.span.end == next.span.start
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {:?}", self.position, self.token_type, self.text())
    }
}
