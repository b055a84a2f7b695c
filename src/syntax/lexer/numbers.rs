//! Number literal lexing
//!
//! Supports:
//! - Decimal integers: 42
//! - Floats: 3.14, 2.5e10, 1.5e-3
//! - Hexadecimal integers: 0xFF
//!
//! A leading `-` is never part of the literal; negation is an expression.

use crate::syntax::token_type::TokenType;

use super::Lexer;

impl Lexer {
    pub(super) fn read_number(&mut self) -> TokenType {
        if self.current_byte() == Some(b'0')
            && self.peek_byte() == Some(b'x')
            && self.peek_n(2).is_some_and(|ch| ch.is_ascii_hexdigit())
        {
            self.read_char(); // '0'
            self.read_char(); // 'x'
            self.reader.consume_hex_run();
            return TokenType::Int;
        }

        self.reader.consume_digit_run();
        let mut token_type = TokenType::Int;

        if self.current_byte() == Some(b'.') && self.peek_byte().is_some_and(|b| b.is_ascii_digit())
        {
            token_type = TokenType::Float;
            self.read_char(); // '.'
            self.reader.consume_digit_run();
        }

        if self.current_byte() == Some(b'e') {
            let exponent_digit = match self.peek_char() {
                Some('-') => self.peek_n(2),
                other => other,
            };
            if exponent_digit.is_some_and(|ch| ch.is_ascii_digit()) {
                token_type = TokenType::Float;
                self.read_char(); // 'e'
                if self.current_byte() == Some(b'-') {
                    self.read_char();
                }
                self.reader.consume_digit_run();
            }
        }

        token_type
    }
}
