use std::fmt;

use serde::Serialize;

use crate::diagnostics::position::Span;
use crate::syntax::token::Token;
use crate::syntax::token_type::TokenType;

use super::declaration::{Declaration, Import, ModuleHeader};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CommentKind {
    Line,
    Block,
    /// `{-| ... -}`
    Doc,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comment {
    pub kind: CommentKind,
    pub text: String,
    pub span: Span,
}

impl Comment {
    /// Builds a comment from a comment token; other tokens yield `None`.
    pub fn from_token(token: &Token) -> Option<Self> {
        let kind = match token.token_type {
            TokenType::LineComment => CommentKind::Line,
            TokenType::BlockComment | TokenType::UnterminatedBlockComment => CommentKind::Block,
            TokenType::DocComment => CommentKind::Doc,
            _ => return None,
        };
        Some(Self {
            kind,
            text: token.text().to_string(),
            span: token.span,
        })
    }

    /// Text between the comment delimiters, trimmed.
    pub fn content(&self) -> &str {
        let text = self.text.as_str();
        let inner = match self.kind {
            CommentKind::Line => text.strip_prefix("--").unwrap_or(text),
            CommentKind::Block => {
                let text = text.strip_prefix("{-").unwrap_or(text);
                text.strip_suffix("-}").unwrap_or(text)
            }
            CommentKind::Doc => {
                let text = text.strip_prefix("{-|").unwrap_or(text);
                text.strip_suffix("-}").unwrap_or(text)
            }
        };
        inner.trim()
    }
}

/// The syntax tree of one Elm source file.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct File {
    pub module: Option<ModuleHeader>,
    pub imports: Vec<Import>,
    pub declarations: Vec<Declaration>,
    /// Every comment in the file, in source order.
    pub comments: Vec<Comment>,
    pub span: Span,
}

impl File {
    pub fn new() -> Self {
        Self::default()
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lines = Vec::new();
        if let Some(module) = &self.module {
            lines.push(module.to_string());
        }
        lines.extend(self.imports.iter().map(|import| import.to_string()));
        lines.extend(self.declarations.iter().map(|decl| decl.to_string()));
        write!(f, "{}", lines.join("\n"))
    }
}
