//! String and character literals

use crate::diagnostics::position::Position;
use crate::syntax::token::Token;
use crate::syntax::token_type::TokenType;

use super::{LexErrorKind, Lexer};

impl Lexer {
    /// Read a string literal. Entry: the cursor is on the opening quote.
    ///
    /// `"""` opens a string that may contain bare quotes and ends at the next
    /// `"""`; `"` opens a string that ends at the first unescaped quote. An
    /// unterminated string runs to the end of input. The token text keeps the
    /// quotes and escapes verbatim.
    pub(super) fn read_string(&mut self) -> Token {
        let start = self.current_index();
        let position = self.cursor_position();

        if self.reader.starts_with("\"\"\"") {
            self.reader.advance_n(3);
            return self.read_triple_quoted_body(start, position);
        }

        self.read_char(); // opening '"'

        loop {
            self.reader.advance_until_any(b"\"\\");
            match self.current_char() {
                Some('"') => {
                    self.read_char();
                    return self.token_from(TokenType::String, start, position);
                }
                Some('\\') => self.read_escape_sequence(),
                _ => break,
            }
        }

        self.push_error(
            LexErrorKind::UnterminatedString {
                triple_quoted: false,
            },
            start,
            position,
        );
        self.token_from(TokenType::UnterminatedString, start, position)
    }

    fn read_triple_quoted_body(
        &mut self,
        start: usize,
        position: Position,
    ) -> Token {
        loop {
            self.reader.advance_until_any(b"\"\\");
            match self.current_char() {
                Some('"') if self.reader.starts_with("\"\"\"") => {
                    self.reader.advance_n(3);
                    return self.token_from(TokenType::String, start, position);
                }
                Some('"') => self.read_char(),
                Some('\\') => self.read_escape_sequence(),
                _ => break,
            }
        }

        self.push_error(
            LexErrorKind::UnterminatedString {
                triple_quoted: true,
            },
            start,
            position,
        );
        self.token_from(TokenType::UnterminatedString, start, position)
    }

    /// Read a character literal: `'`, exactly one char or escape, `'`.
    pub(super) fn read_char_literal(&mut self) -> Token {
        let start = self.current_index();
        let position = self.cursor_position();
        self.read_char(); // opening '\''

        let mut parts = 0usize;
        loop {
            match self.current_char() {
                Some('\'') => {
                    self.read_char();
                    break;
                }
                None => {
                    self.push_error(LexErrorKind::UnterminatedChar, start, position);
                    return self.token_from(TokenType::UnterminatedChar, start, position);
                }
                Some('\\') => {
                    self.read_escape_sequence();
                    parts += 1;
                }
                Some(_) => {
                    self.read_char();
                    parts += 1;
                }
            }
        }

        if parts != 1 {
            self.push_error(LexErrorKind::InvalidCharLiteral(parts), start, position);
        }
        self.token_from(TokenType::Char, start, position)
    }
}
