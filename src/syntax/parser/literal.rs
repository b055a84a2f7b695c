use crate::diagnostics::position::Span;
use crate::syntax::expression::{Expression, Literal};
use crate::syntax::token::Token;
use crate::syntax::token_type::TokenType;

use super::Parser;

/// Literal tokens, including unterminated ones whose error the lexer already
/// reported; they still yield a literal so one mistake gives one diagnostic.
pub(super) fn is_literal_token(token_type: TokenType) -> bool {
    token_type.is_literal()
        || matches!(
            token_type,
            TokenType::UnterminatedString | TokenType::UnterminatedChar
        )
}

fn literal_from_token(token: &Token) -> Option<Literal> {
    let raw = token.text().to_string();
    match token.token_type {
        TokenType::Int => Some(Literal::Int(raw)),
        TokenType::Float => Some(Literal::Float(raw)),
        TokenType::String | TokenType::UnterminatedString => Some(Literal::String(raw)),
        TokenType::Char | TokenType::UnterminatedChar => Some(Literal::Char(raw)),
        _ => None,
    }
}

impl Parser {
    /// Consumes a literal token. The caller checks [`is_literal_token`] first.
    pub(super) fn parse_literal(&mut self) -> Option<(Literal, Span)> {
        let literal = literal_from_token(self.current());
        match literal {
            Some(literal) => {
                let token = self.next_token();
                Some((literal, token.span))
            }
            None => {
                self.unexpected("a literal");
                None
            }
        }
    }

    /// `-1` or `-2.5` in a pattern: a minus touching a number literal.
    pub(super) fn parse_negative_literal(&mut self) -> Option<(Literal, Span)> {
        let minus = self.expect(TokenType::Minus)?;
        let (literal, span) = match self.current().token_type {
            TokenType::Int | TokenType::Float => self.parse_literal()?,
            _ => {
                self.unexpected("a number");
                return None;
            }
        };
        let literal = match literal {
            Literal::Int(raw) => Literal::Int(format!("-{}", raw)),
            Literal::Float(raw) => Literal::Float(format!("-{}", raw)),
            other => other,
        };
        Some((literal, minus.span.merge(span)))
    }

    pub(super) fn parse_literal_expression(&mut self) -> Option<Expression> {
        let (literal, span) = self.parse_literal()?;
        Some(Expression::Literal { literal, span })
    }
}
