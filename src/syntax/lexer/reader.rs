//! Cursor over the shared source text.
//!
//! The cursor is a byte offset that always sits on a char boundary. Lines are
//! 1-based and columns count chars from 0, matching [`Position`].

use std::sync::Arc;

use crate::diagnostics::position::Position;

#[derive(Debug, Clone)]
pub(super) struct CharReader {
    source: Arc<str>,
    offset: usize,
    position: Position,
}

impl CharReader {
    pub(super) fn new(source: Arc<str>) -> Self {
        Self {
            source,
            offset: 0,
            position: Position::new(1, 0),
        }
    }

    pub(super) fn source_arc(&self) -> Arc<str> {
        Arc::clone(&self.source)
    }

    fn rest(&self) -> &str {
        self.source.get(self.offset..).unwrap_or_default()
    }

    pub(super) fn current(&self) -> Option<char> {
        self.rest().chars().next()
    }

    pub(super) fn current_byte(&self) -> Option<u8> {
        self.source.as_bytes().get(self.offset).copied()
    }

    /// Steps over the current char and returns the new one.
    pub(super) fn advance(&mut self) -> Option<char> {
        if let Some(ch) = self.current() {
            self.offset += ch.len_utf8();
            self.step_position(ch);
        }
        self.current()
    }

    pub(super) fn advance_n(&mut self, n: usize) {
        for _ in 0..n {
            if self.advance().is_none() {
                break;
            }
        }
    }

    pub(super) fn peek(&self) -> Option<char> {
        self.peek_n(1)
    }

    /// The char `n` places after the current one; `peek_n(0)` is the current char.
    pub(super) fn peek_n(&self, n: usize) -> Option<char> {
        self.rest().chars().nth(n)
    }

    /// The first byte of the char after the current one.
    pub(super) fn peek_byte(&self) -> Option<u8> {
        let width = self.current()?.len_utf8();
        self.source.as_bytes().get(self.offset + width).copied()
    }

    pub(super) fn starts_with(&self, prefix: &str) -> bool {
        self.rest().starts_with(prefix)
    }

    pub(super) fn consume_hex_run(&mut self) {
        self.consume_ascii_while(|b| b.is_ascii_hexdigit());
    }

    pub(super) fn consume_digit_run(&mut self) {
        self.consume_ascii_while(|b| b.is_ascii_digit());
    }

    pub(super) fn consume_identifier_continue_run(&mut self) {
        self.consume_ascii_while(|b| b == b'_' || b.is_ascii_alphanumeric());
    }

    /// Moves to the next byte that is one of `stops`, or to the end of input.
    /// `stops` must be ASCII so the cursor lands on a char boundary.
    pub(super) fn advance_until_any(&mut self, stops: &[u8]) {
        let run = self
            .rest()
            .bytes()
            .position(|b| stops.contains(&b))
            .unwrap_or(self.rest().len());
        self.skip_bytes(run);
    }

    fn consume_ascii_while(&mut self, predicate: impl Fn(u8) -> bool) {
        let run = self
            .rest()
            .bytes()
            .take_while(|b| b.is_ascii() && predicate(*b))
            .count();
        self.skip_bytes(run);
    }

    fn skip_bytes(&mut self, len: usize) {
        let end = self.offset + len;
        let source = Arc::clone(&self.source);
        let skipped = source.get(self.offset..end).unwrap_or_default();
        for ch in skipped.chars() {
            self.step_position(ch);
        }
        self.offset = end.min(self.source.len());
    }

    fn step_position(&mut self, ch: char) {
        if ch == '\n' {
            self.position.line += 1;
            self.position.column = 0;
        } else {
            self.position.column += 1;
        }
    }

    pub(super) fn index(&self) -> usize {
        self.offset
    }

    pub(super) fn position(&self) -> Position {
        self.position
    }

    pub(super) fn slice_str(&self, start: usize, end: usize) -> &str {
        self.source.get(start..end).unwrap_or_default()
    }
}
