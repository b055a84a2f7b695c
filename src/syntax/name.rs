use std::fmt;

use serde::Serialize;

use crate::diagnostics::position::Span;

/// A single identifier as written in the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Name {
    pub value: String,
    pub span: Span,
}

impl Name {
    pub fn new(value: impl Into<String>, span: Span) -> Self {
        Self {
            value: value.into(),
            span,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A dotted name such as `Html.Attributes.class`, `Maybe.Just` or `Dict`.
///
/// Segments are joined by dots with nothing in between. Every segment but the
/// last is upper-case; the last one is lower-case for value references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QualifiedName {
    pub segments: Vec<String>,
    pub span: Span,
}

impl QualifiedName {
    pub fn new(segments: Vec<String>, span: Span) -> Self {
        debug_assert!(!segments.is_empty(), "qualified name without segments");
        Self { segments, span }
    }

    /// The final segment, the thing actually being referred to.
    pub fn last(&self) -> &str {
        self.segments.last().map_or("", String::as_str)
    }

    /// True for value references (`List.map`), false for types, modules and
    /// constructors (`Maybe.Just`).
    pub fn is_value(&self) -> bool {
        self.last().starts_with(|ch: char| ch.is_ascii_lowercase())
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}
