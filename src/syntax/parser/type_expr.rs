use crate::diagnostics::EXPECTED_TYPE;
use crate::syntax::name::Name;
use crate::syntax::token_type::TokenType;
use crate::syntax::type_expr::{RecordFieldType, TypeExpr};

use super::Parser;
use super::helpers::describe_token;

impl Parser {
    /// `a -> b -> c`, nested to the right. Application binds tighter than `->`.
    pub(super) fn parse_type(&mut self) -> Option<TypeExpr> {
        let parameter = self.parse_type_application()?;
        if !self.is_current(TokenType::Arrow) || self.layout_ends() {
            return Some(parameter);
        }

        self.next_token(); // '->'
        let result = self.parse_type()?;
        let span = parameter.span().merge(result.span());
        Some(TypeExpr::Arrow {
            parameter: Box::new(parameter),
            result: Box::new(result),
            span,
        })
    }

    /// `Dict String (List a)`: a type reference applied to type atoms.
    fn parse_type_application(&mut self) -> Option<TypeExpr> {
        if !self.is_current(TokenType::UpperIdent) || self.layout_ends() {
            return self.parse_type_atom();
        }

        let name = self.parse_qualified_name(false);
        let arguments = self.parse_type_arguments()?;
        let span = arguments
            .last()
            .map_or(name.span, |last| name.span.merge(last.span()));
        Some(TypeExpr::Reference {
            name,
            arguments,
            span,
        })
    }

    /// Type atoms following a type or constructor name on the same logical line.
    pub(super) fn parse_type_arguments(&mut self) -> Option<Vec<TypeExpr>> {
        let mut arguments = Vec::new();
        while !self.layout_ends() && starts_type_atom(self.current().token_type) {
            arguments.push(self.parse_type_atom()?);
        }
        Some(arguments)
    }

    fn parse_type_atom(&mut self) -> Option<TypeExpr> {
        match self.current().token_type {
            _ if self.layout_ends() => {
                let got = describe_token(self.current());
                self.error_at_current(&EXPECTED_TYPE, &[got.as_str()]);
                None
            }
            TokenType::UpperIdent => {
                let name = self.parse_qualified_name(false);
                Some(TypeExpr::Reference {
                    span: name.span,
                    name,
                    arguments: Vec::new(),
                })
            }
            TokenType::LowerIdent => {
                let token = self.next_token();
                Some(TypeExpr::Variable {
                    name: Name::new(token.text(), token.span),
                    span: token.span,
                })
            }
            TokenType::LParen => self.parse_parenthesized_type(),
            TokenType::LBrace => self.parse_record_type(),
            _ => {
                let got = describe_token(self.current());
                self.error_at_current(&EXPECTED_TYPE, &[got.as_str()]);
                None
            }
        }
    }

    fn parse_parenthesized_type(&mut self) -> Option<TypeExpr> {
        let open = self.next_token();
        if let Some(close) = self.eat(TokenType::RParen) {
            return Some(TypeExpr::Unit {
                span: open.span.merge(close.span),
            });
        }

        let (mut elements, close) =
            self.parse_comma_separated(TokenType::RParen, Self::parse_type)?;
        let span = open.span.merge(close.span);

        if elements.len() > 1 {
            return Some(TypeExpr::Tuple { elements, span });
        }
        Some(match elements.pop() {
            Some(inner) => TypeExpr::Parenthesized {
                inner: Box::new(inner),
                span,
            },
            None => TypeExpr::Unit { span },
        })
    }

    /// `{ name : String }` or the extensible `{ a | name : String }`.
    fn parse_record_type(&mut self) -> Option<TypeExpr> {
        let open = self.next_token();

        let base = if self.is_current(TokenType::LowerIdent) && self.is_peek(TokenType::Pipe) {
            let name = self.next_token();
            self.next_token(); // '|'
            Some(Name::new(name.text(), name.span))
        } else {
            None
        };

        let (fields, close) =
            self.parse_comma_separated(TokenType::RBrace, Self::parse_record_field_type)?;
        Some(TypeExpr::Record {
            base,
            fields,
            span: open.span.merge(close.span),
        })
    }

    fn parse_record_field_type(&mut self) -> Option<RecordFieldType> {
        let name = self.expect_name(TokenType::LowerIdent)?;
        self.expect(TokenType::Colon)?;
        let value = self.parse_type()?;
        let span = name.span.merge(value.span());
        Some(RecordFieldType { name, value, span })
    }
}

fn starts_type_atom(token_type: TokenType) -> bool {
    matches!(
        token_type,
        TokenType::UpperIdent | TokenType::LowerIdent | TokenType::LParen | TokenType::LBrace
    )
}
