use std::{fmt, ops::Deref, sync::Arc};

use serde::{Serialize, Serializer};

use crate::diagnostics::position::Span;

/// The text of a token.
///
/// Lexed tokens share the source and keep only their byte range, so a file's
/// token stream holds one copy of the text no matter how many tokens it has.
#[derive(Clone)]
pub enum Lexeme {
    Shared { source: Arc<str>, span: Span },
    /// Text that does not come from a lexed source, like a synthesized `Eof`.
    Detached(String),
}

impl Lexeme {
    pub fn shared(source: Arc<str>, start: usize, end: usize) -> Self {
        Lexeme::Shared {
            source,
            span: Span::new(start, end),
        }
    }

    /// The lexer only cuts at char boundaries, so the range is always valid.
    pub fn as_str(&self) -> &str {
        match self {
            Lexeme::Shared { source, span } => span.slice(source).unwrap_or_default(),
            Lexeme::Detached(text) => text,
        }
    }
}

impl Deref for Lexeme {
    type Target = str;

    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Lexeme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Lexeme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl Serialize for Lexeme {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl PartialEq for Lexeme {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Lexeme {}

impl PartialEq<&str> for Lexeme {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl From<&str> for Lexeme {
    fn from(text: &str) -> Self {
        Lexeme::Detached(text.to_string())
    }
}
