use crate::diagnostics::{MALFORMED_DECLARATION, MALFORMED_LEFT_HAND_SIDE};
use crate::syntax::declaration::{
    Declaration, LeftHandSide, TypeAliasDeclaration, TypeAnnotation, UnionDeclaration,
    UnionVariant, ValueDeclaration,
};
use crate::syntax::file::Comment;
use crate::syntax::name::Name;
use crate::syntax::token_type::TokenType;

use super::Parser;
use super::helpers::describe_token;

impl Parser {
    pub(super) fn parse_declaration(&mut self) -> Option<Declaration> {
        let documentation = self.take_documentation();

        match self.current().token_type {
            TokenType::Type if self.is_peek(TokenType::Alias) => self
                .parse_type_alias(documentation)
                .map(Declaration::TypeAlias),
            TokenType::Type => self.parse_union(documentation).map(Declaration::Union),
            TokenType::Port => {
                let start = self.next_token().span.start;
                let mut annotation = self.parse_type_annotation(documentation)?;
                annotation.span = self.span_from(start);
                Some(Declaration::Port(annotation))
            }
            TokenType::LowerIdent if self.is_peek(TokenType::Colon) => self
                .parse_type_annotation(documentation)
                .map(Declaration::Annotation),
            TokenType::LowerIdent
            | TokenType::LParen
            | TokenType::LBrace
            | TokenType::LBracket
            | TokenType::Underscore => self
                .parse_value_declaration(documentation)
                .map(Declaration::Value),
            _ => {
                let got = describe_token(self.current());
                self.error_at_current(&MALFORMED_DECLARATION, &[got.as_str()]);
                None
            }
        }
    }

    /// The doc comment written right before the current token, if not yet claimed.
    pub(super) fn take_documentation(&mut self) -> Option<Comment> {
        let index = self.docs.get_mut(self.cursor)?.take()?;
        self.comments.get(index).cloned()
    }

    /// `name : Type`
    pub(super) fn parse_type_annotation(
        &mut self,
        documentation: Option<Comment>,
    ) -> Option<TypeAnnotation> {
        let name = self.expect_name(TokenType::LowerIdent)?;
        self.expect(TokenType::Colon)?;
        let annotation = self.parse_type()?;
        let span = name.span.merge(annotation.span());
        Some(TypeAnnotation {
            documentation,
            name,
            annotation,
            span,
        })
    }

    /// `lhs = body`
    pub(super) fn parse_value_declaration(
        &mut self,
        documentation: Option<Comment>,
    ) -> Option<ValueDeclaration> {
        let left = self.parse_left_hand_side()?;
        self.expect(TokenType::Assign)?;
        let body = self.parse_expression()?;
        let span = left.span().merge(body.span());
        Some(ValueDeclaration {
            documentation,
            left,
            body,
            span,
        })
    }

    /// A function name with argument patterns, or else a destructuring pattern.
    fn parse_left_hand_side(&mut self) -> Option<LeftHandSide> {
        if !self.is_current(TokenType::LowerIdent) {
            let pattern = self.parse_pattern()?;
            return Some(LeftHandSide::Pattern { pattern });
        }

        let name_token = self.next_token();
        let name = Name::new(name_token.text(), name_token.span);
        let mut arguments = Vec::new();

        while !self.is_current(TokenType::Assign) && !self.layout_ends() {
            if matches!(
                self.current().token_type,
                TokenType::UpperIdent | TokenType::Cons
            ) {
                let text = self.current().text().to_string();
                self.error_at_current(&MALFORMED_LEFT_HAND_SIDE, &[text.as_str()]);
                return None;
            }
            arguments.push(self.parse_argument_pattern()?);
        }

        let span = self.span_from(name.span.start);
        Some(LeftHandSide::Function {
            name,
            arguments,
            span,
        })
    }

    /// `type alias Name a b = Type`
    fn parse_type_alias(&mut self, documentation: Option<Comment>) -> Option<TypeAliasDeclaration> {
        let start = self.next_token().span.start;
        self.expect(TokenType::Alias)?;
        let name = self.expect_name(TokenType::UpperIdent)?;
        let variables = self.parse_type_variables();
        self.expect(TokenType::Assign)?;
        let body = self.parse_type()?;

        Some(TypeAliasDeclaration {
            documentation,
            name,
            variables,
            body,
            span: self.span_from(start),
        })
    }

    /// `type Name a = A a | B`
    fn parse_union(&mut self, documentation: Option<Comment>) -> Option<UnionDeclaration> {
        let start = self.next_token().span.start;
        let name = self.expect_name(TokenType::UpperIdent)?;
        let variables = self.parse_type_variables();
        self.expect(TokenType::Assign)?;

        let mut variants = vec![self.parse_union_variant()?];
        while self.eat(TokenType::Pipe).is_some() {
            variants.push(self.parse_union_variant()?);
        }

        Some(UnionDeclaration {
            documentation,
            name,
            variables,
            variants,
            span: self.span_from(start),
        })
    }

    fn parse_type_variables(&mut self) -> Vec<Name> {
        let mut variables = Vec::new();
        while let Some(token) = self.eat(TokenType::LowerIdent) {
            variables.push(Name::new(token.text(), token.span));
        }
        variables
    }

    fn parse_union_variant(&mut self) -> Option<UnionVariant> {
        let name = self.expect_name(TokenType::UpperIdent)?;
        let arguments = self.parse_type_arguments()?;
        let span = arguments
            .last()
            .map_or(name.span, |last| name.span.merge(last.span()));
        Some(UnionVariant {
            name,
            arguments,
            span,
        })
    }
}
