use crate::diagnostics::EXPECTED_PATTERN;
use crate::syntax::name::Name;
use crate::syntax::pattern::Pattern;
use crate::syntax::token_type::TokenType;

use super::Parser;
use super::helpers::describe_token;
use super::literal::is_literal_token;

impl Parser {
    /// A full pattern: terms joined by `::` (grouped to the right), then any
    /// number of `as name` aliases covering everything before them.
    pub(super) fn parse_pattern(&mut self) -> Option<Pattern> {
        let mut terms = vec![self.parse_pattern_term()?];
        while self.is_current(TokenType::Cons) && !self.layout_ends() {
            self.next_token();
            terms.push(self.parse_pattern_term()?);
        }

        let mut pattern = terms.pop()?;
        while let Some(head) = terms.pop() {
            let span = head.span().merge(pattern.span());
            pattern = Pattern::Cons {
                head: Box::new(head),
                tail: Box::new(pattern),
                span,
            };
        }

        if self.eat(TokenType::As).is_some() {
            let alias = self.expect_name(TokenType::LowerIdent)?;
            let span = pattern.span().merge(alias.span);
            pattern = Pattern::Alias {
                pattern: Box::new(pattern),
                alias,
                span,
            };
        }

        Some(pattern)
    }

    /// A constructor with its arguments, or an argument pattern.
    fn parse_pattern_term(&mut self) -> Option<Pattern> {
        if !self.is_current(TokenType::UpperIdent) {
            return self.parse_argument_pattern();
        }

        let name = self.parse_qualified_name(false);
        let mut arguments = Vec::new();
        while !self.layout_ends() && self.starts_constructor_argument() {
            arguments.push(self.parse_lambda_parameter()?);
        }

        let span = arguments
            .last()
            .map_or(name.span, |last| name.span.merge(last.span()));
        Some(Pattern::Constructor {
            name,
            arguments,
            span,
        })
    }

    fn starts_constructor_argument(&self) -> bool {
        match self.current().token_type {
            TokenType::UpperIdent
            | TokenType::Underscore
            | TokenType::LowerIdent
            | TokenType::LParen
            | TokenType::LBracket
            | TokenType::LBrace => true,
            TokenType::Minus => self.starts_negative_literal(),
            other => is_literal_token(other),
        }
    }

    fn starts_negative_literal(&self) -> bool {
        self.is_current(TokenType::Minus)
            && matches!(self.peek().token_type, TokenType::Int | TokenType::Float)
            && self.current().touches(self.peek())
    }

    /// Argument patterns, plus bare constructors without arguments. Used for
    /// lambda parameters and constructor arguments.
    pub(super) fn parse_lambda_parameter(&mut self) -> Option<Pattern> {
        if self.is_current(TokenType::UpperIdent) {
            let name = self.parse_qualified_name(false);
            return Some(Pattern::Constructor {
                span: name.span,
                name,
                arguments: Vec::new(),
            });
        }
        self.parse_argument_pattern()
    }

    /// The restricted patterns allowed directly as function arguments:
    /// wildcard, name, literal, unit, tuple, list, record or parenthesized.
    pub(super) fn parse_argument_pattern(&mut self) -> Option<Pattern> {
        match self.current().token_type {
            TokenType::Underscore => {
                let token = self.next_token();
                Some(Pattern::Wildcard { span: token.span })
            }
            TokenType::LowerIdent => {
                let token = self.next_token();
                Some(Pattern::Var {
                    name: Name::new(token.text(), token.span),
                    span: token.span,
                })
            }
            TokenType::Minus if self.starts_negative_literal() => {
                let (literal, span) = self.parse_negative_literal()?;
                Some(Pattern::Literal { literal, span })
            }
            TokenType::LParen => self.parse_parenthesized_pattern(),
            TokenType::LBracket => {
                let open = self.next_token();
                let (elements, close) =
                    self.parse_comma_separated(TokenType::RBracket, Self::parse_pattern)?;
                Some(Pattern::List {
                    elements,
                    span: open.span.merge(close.span),
                })
            }
            TokenType::LBrace => {
                let open = self.next_token();
                let (fields, close) = self.parse_comma_separated(TokenType::RBrace, |parser| {
                    parser.expect_name(TokenType::LowerIdent)
                })?;
                Some(Pattern::Record {
                    fields,
                    span: open.span.merge(close.span),
                })
            }
            other if is_literal_token(other) => {
                let (literal, span) = self.parse_literal()?;
                Some(Pattern::Literal { literal, span })
            }
            _ => {
                let got = describe_token(self.current());
                self.error_at_current(&EXPECTED_PATTERN, &[got.as_str()]);
                None
            }
        }
    }

    fn parse_parenthesized_pattern(&mut self) -> Option<Pattern> {
        let open = self.next_token();
        if let Some(close) = self.eat(TokenType::RParen) {
            return Some(Pattern::Unit {
                span: open.span.merge(close.span),
            });
        }

        let (mut elements, close) =
            self.parse_comma_separated(TokenType::RParen, Self::parse_pattern)?;
        let span = open.span.merge(close.span);

        if elements.len() > 1 {
            return Some(Pattern::Tuple { elements, span });
        }
        Some(match elements.pop() {
            Some(inner) => Pattern::Parenthesized {
                inner: Box::new(inner),
                span,
            },
            None => Pattern::Unit { span },
        })
    }
}
