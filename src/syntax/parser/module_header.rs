use crate::syntax::declaration::{ExposedItem, Exposing, Import, ModuleHeader, ModuleKind};
use crate::syntax::fixity::is_binary_operator;
use crate::syntax::name::{Name, QualifiedName};
use crate::syntax::token_type::TokenType;

use super::Parser;

impl Parser {
    /// `[port] module Name exposing (...)`, then the module's doc comment.
    pub(super) fn parse_module_header(&mut self) -> Option<ModuleHeader> {
        let start = self.current().span.start;
        let kind = match self.eat(TokenType::Port) {
            Some(_) => ModuleKind::Port,
            None => ModuleKind::Plain,
        };
        self.expect(TokenType::Module)?;
        let name = self.parse_module_name()?;
        self.expect(TokenType::Exposing)?;
        let exposing = self.parse_exposing()?;
        let span = self.span_from(start);

        Some(ModuleHeader {
            kind,
            name,
            exposing,
            documentation: self.take_documentation(),
            span,
        })
    }

    /// `import Name [as Alias] [exposing (...)]`
    pub(super) fn parse_import(&mut self) -> Option<Import> {
        let start = self.next_token().span.start;
        let name = self.parse_module_name()?;

        let alias = match self.eat(TokenType::As) {
            Some(_) => Some(self.expect_name(TokenType::UpperIdent)?),
            None => None,
        };
        let exposing = match self.eat(TokenType::Exposing) {
            Some(_) => Some(self.parse_exposing()?),
            None => None,
        };

        Some(Import {
            name,
            alias,
            exposing,
            span: self.span_from(start),
        })
    }

    fn parse_module_name(&mut self) -> Option<QualifiedName> {
        if !self.is_current(TokenType::UpperIdent) {
            self.unexpected("a module name");
            return None;
        }
        Some(self.parse_qualified_name(false))
    }

    /// `(..)` or a non-empty list of exposed names.
    pub(super) fn parse_exposing(&mut self) -> Option<Exposing> {
        let open = self.expect(TokenType::LParen)?;

        if self.is_current(TokenType::DoubleDot) && self.is_peek(TokenType::RParen) {
            self.next_token();
            let close = self.next_token();
            return Some(Exposing::All {
                span: open.span.merge(close.span),
            });
        }

        if self.is_current(TokenType::RParen) {
            self.unexpected("an exposed name");
        }
        let (items, close) =
            self.parse_comma_separated(TokenType::RParen, Self::parse_exposed_item)?;
        Some(Exposing::Explicit {
            items,
            span: open.span.merge(close.span),
        })
    }

    fn parse_exposed_item(&mut self) -> Option<ExposedItem> {
        match self.current().token_type {
            TokenType::LowerIdent => {
                let token = self.next_token();
                Some(ExposedItem::Value {
                    name: Name::new(token.text(), token.span),
                })
            }
            TokenType::LParen
                if is_binary_operator(self.peek().token_type)
                    && self.peek_n(2).token_type == TokenType::RParen =>
            {
                let open = self.next_token();
                let operator = self.next_token();
                let close = self.next_token();
                Some(ExposedItem::Operator {
                    name: Name::new(operator.text(), operator.span),
                    span: open.span.merge(close.span),
                })
            }
            TokenType::UpperIdent => {
                let token = self.next_token();
                let name = Name::new(token.text(), token.span);
                let constructors = if self.is_current(TokenType::LParen) {
                    Some(self.parse_exposed_constructors()?)
                } else {
                    None
                };
                let span = constructors
                    .as_ref()
                    .map_or(name.span, |ctors| name.span.merge(ctors.span()));
                Some(ExposedItem::Type {
                    name,
                    constructors,
                    span,
                })
            }
            _ => {
                self.unexpected("an exposed name");
                None
            }
        }
    }

    /// `(..)` or `(A, B)` after an exposed type name.
    fn parse_exposed_constructors(&mut self) -> Option<Exposing> {
        let open = self.next_token();
        if self.is_current(TokenType::DoubleDot) && self.is_peek(TokenType::RParen) {
            self.next_token();
            let close = self.next_token();
            return Some(Exposing::All {
                span: open.span.merge(close.span),
            });
        }

        let (items, close) = self.parse_comma_separated(TokenType::RParen, |parser| {
            let name = parser.expect_name(TokenType::UpperIdent)?;
            Some(ExposedItem::Type {
                span: name.span,
                name,
                constructors: None,
            })
        })?;
        Some(Exposing::Explicit {
            items,
            span: open.span.merge(close.span),
        })
    }
}
