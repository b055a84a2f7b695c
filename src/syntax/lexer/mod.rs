//! The Elm lexer - tokenizes source text into tokens, extras included

mod comments;
mod error;
mod escape;
mod helpers;
mod identifiers;
mod numbers;
mod reader;
mod strings;

use std::sync::Arc;

use crate::diagnostics::position::{Position, Span};
use crate::syntax::token::Token;
use crate::syntax::token_type::TokenType;

pub use error::{LexError, LexErrorKind};

use helpers::{is_extra_char, starts_line_continuation};
use reader::CharReader;

/// The Elm lexer.
///
/// Produces every token of the input, including whitespace and comments, so
/// the concatenated token texts reproduce the source exactly. Malformed input
/// never stops the scan: it becomes an `Illegal` (or unterminated) token plus
/// a [`LexError`], and the cursor always moves forward by at least one char.
#[derive(Debug, Clone)]
pub struct Lexer {
    reader: CharReader,
    errors: Vec<LexError>,
    emitted_eof: bool,
}

impl Lexer {
    pub fn new(input: impl Into<Arc<str>>) -> Self {
        Self {
            reader: CharReader::new(input.into()),
            errors: Vec::new(),
            emitted_eof: false,
        }
    }

    /// Errors collected so far, in source order
    pub fn errors(&self) -> &[LexError] {
        &self.errors
    }

    pub fn take_errors(&mut self) -> Vec<LexError> {
        std::mem::take(&mut self.errors)
    }

    /// Get the next token from the input. Once the input is exhausted this
    /// keeps returning `Eof`.
    pub fn next_token(&mut self) -> Token {
        let start = self.current_index();
        let position = self.cursor_position();

        let token_type = match self.current_char() {
            None => {
                self.emitted_eof = true;
                TokenType::Eof
            }

            // Extras
            Some(ch) if is_extra_char(ch) => return self.read_whitespace(),
            Some('\\') if starts_line_continuation(self.peek_char(), self.peek_n(2)) => {
                return self.read_whitespace();
            }
            Some('-') if self.peek_char() == Some('-') => return self.read_line_comment(),
            Some('{') if self.peek_char() == Some('-') => return self.read_block_comment(),

            // Two-character symbols
            Some('-') if self.peek_char() == Some('>') => self.two(TokenType::Arrow),
            Some('&') if self.peek_char() == Some('&') => self.two(TokenType::And),
            Some('|') if self.peek_char() == Some('|') => self.two(TokenType::Or),
            Some(':') if self.peek_char() == Some(':') => self.two(TokenType::Cons),
            Some('.') if self.peek_char() == Some('.') => self.two(TokenType::DoubleDot),

            // Single-character operators and delimiters
            Some('^') => self.one(TokenType::Caret),
            Some('*') => self.one(TokenType::Asterisk),
            Some('/') => self.one(TokenType::Slash),
            Some('+') => self.one(TokenType::Plus),
            Some('-') => self.one(TokenType::Minus),
            Some('<') => self.one(TokenType::Lt),
            Some('>') => self.one(TokenType::Gt),
            Some('|') => self.one(TokenType::Pipe),
            Some('(') => self.one(TokenType::LParen),
            Some(')') => self.one(TokenType::RParen),
            Some('[') => self.one(TokenType::LBracket),
            Some(']') => self.one(TokenType::RBracket),
            Some('{') => self.one(TokenType::LBrace),
            Some('}') => self.one(TokenType::RBrace),
            Some(',') => self.one(TokenType::Comma),
            Some('=') => self.one(TokenType::Assign),
            Some(':') => self.one(TokenType::Colon),
            Some('\\') => self.one(TokenType::Backslash),
            Some('.') => self.one(TokenType::Dot),
            Some('_') => self.one(TokenType::Underscore),

            // Literals
            Some('"') => return self.read_string(),
            Some('\'') => return self.read_char_literal(),
            Some(ch) if ch.is_ascii_digit() => self.read_number(),

            // Identifiers and keywords
            Some(ch) if ch.is_ascii_uppercase() => self.read_upper_identifier(),
            Some(ch) if ch.is_ascii_lowercase() => self.read_lower_identifier(),

            // Illegal character
            Some(ch) => {
                self.read_char();
                self.push_error(LexErrorKind::InvalidCharacter(ch), start, position);
                TokenType::Illegal
            }
        };

        self.token_from(token_type, start, position)
    }

    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token();
            let is_eof = token.token_type == TokenType::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }

        log::debug!(
            "lexed {} tokens with {} errors",
            tokens.len(),
            self.errors.len()
        );
        tokens
    }

    fn one(&mut self, token_type: TokenType) -> TokenType {
        self.read_char();
        token_type
    }

    fn two(&mut self, token_type: TokenType) -> TokenType {
        self.read_char();
        self.read_char();
        token_type
    }

    /// Whitespace, BOM/zero-width characters and `\` line continuations, as one token.
    fn read_whitespace(&mut self) -> Token {
        let start = self.current_index();
        let position = self.cursor_position();

        loop {
            match self.current_char() {
                Some(ch) if is_extra_char(ch) => {
                    self.read_char();
                }
                Some('\\') if starts_line_continuation(self.peek_char(), self.peek_n(2)) => {
                    self.read_char(); // '\\'
                    if self.current_char() == Some('\r') {
                        self.read_char();
                    }
                    self.read_char(); // '\n'
                }
                _ => break,
            }
        }

        self.token_from(TokenType::Whitespace, start, position)
    }

    // Shared helpers for the per-category submodules

    pub(super) fn token_from(
        &self,
        token_type: TokenType,
        start: usize,
        position: Position,
    ) -> Token {
        Token::lexed(
            token_type,
            self.reader.source_arc(),
            start,
            self.current_index(),
            position,
        )
    }

    pub(super) fn push_error(&mut self, kind: LexErrorKind, start: usize, position: Position) {
        let span = Span::new(start, self.current_index().max(start));
        self.errors.push(LexError {
            kind,
            span,
            position,
        });
    }

    pub(super) fn read_char(&mut self) {
        self.reader.advance();
    }

    pub(super) fn current_char(&self) -> Option<char> {
        self.reader.current()
    }

    pub(super) fn current_byte(&self) -> Option<u8> {
        self.reader.current_byte()
    }

    pub(super) fn peek_char(&self) -> Option<char> {
        self.reader.peek()
    }

    pub(super) fn peek_byte(&self) -> Option<u8> {
        self.reader.peek_byte()
    }

    pub(super) fn peek_n(&self, n: usize) -> Option<char> {
        self.reader.peek_n(n)
    }

    pub(super) fn current_index(&self) -> usize {
        self.reader.index()
    }

    pub(super) fn cursor_position(&self) -> Position {
        self.reader.position()
    }

    pub(super) fn slice_str(&self, start: usize, end: usize) -> &str {
        self.reader.slice_str(start, end)
    }
}

impl Iterator for Lexer {
    type Item = Token;

    /// Yields every token up to and including the first `Eof`.
    fn next(&mut self) -> Option<Token> {
        if self.emitted_eof {
            return None;
        }
        Some(self.next_token())
    }
}
