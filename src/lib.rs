//! Syntax analysis for Elm: a lexer that keeps every byte of the source and a
//! recursive-descent parser that builds a concrete syntax tree, reporting
//! errors as diagnostics instead of stopping at the first one.

pub mod batch;
pub mod diagnostics;
pub mod syntax;

use serde::Serialize;

use crate::diagnostics::Diagnostic;
use crate::syntax::file::File;
use crate::syntax::lexer::{LexError, Lexer};
use crate::syntax::parser::Parser;
use crate::syntax::token::Token;

/// Everything produced by parsing one source text.
#[derive(Debug, Clone, Serialize)]
pub struct ParseResult {
    pub file: File,
    /// Every token of the input, trivia included, ending with `Eof`.
    #[serde(skip)]
    pub tokens: Vec<Token>,
    /// Lexical and syntax errors ordered by source offset.
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseResult {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }
}

/// Splits `source` into tokens. Concatenating the token texts gives back `source`.
pub fn tokenize(source: &str) -> (Vec<Token>, Vec<LexError>) {
    let mut lexer = Lexer::new(source);
    let tokens = lexer.tokenize();
    (tokens, lexer.take_errors())
}

/// Parses one Elm file. Always returns a tree; problems end up in `diagnostics`.
pub fn parse(source: &str) -> ParseResult {
    let (tokens, lex_errors) = tokenize(source);

    let mut parser = Parser::from_tokens(tokens.iter().cloned());
    let file = parser.parse_file();

    let mut diagnostics: Vec<Diagnostic> = lex_errors.iter().map(LexError::to_diagnostic).collect();
    diagnostics.append(&mut parser.errors);
    diagnostics.sort_by_key(|diag| diag.span().map_or(usize::MAX, |span| span.start));

    ParseResult {
        file,
        tokens,
        diagnostics,
    }
}
