//! Recursive-descent parser producing the Elm syntax tree.
//!
//! The parser works on the significant tokens of a lexed file. Trivia is
//! stripped up front, but two facts about it are kept per token: whether a
//! line break precedes the token (for the layout rule) and which doc comment,
//! if any, sits right before it.

use crate::diagnostics::Diagnostic;
use crate::diagnostics::position::{Position, Span};
use crate::syntax::expression::Expression;
use crate::syntax::file::{Comment, CommentKind, File};
use crate::syntax::lexer::{LexError, Lexer};
use crate::syntax::pattern::Pattern;
use crate::syntax::token::Token;
use crate::syntax::token_type::TokenType;
use crate::syntax::type_expr::TypeExpr;

mod declaration;
mod expression;
mod helpers;
mod literal;
mod module_header;
mod pattern;
mod type_expr;

/// How a token on a fresh line is treated by the innermost enclosing construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Layout {
    /// Tokens starting a line at or left of this column end the expression.
    Column(usize),
    /// Inside brackets line breaks carry no meaning.
    Delimited,
}

pub struct Parser {
    pub(super) tokens: Vec<Token>,
    pub(super) line_starts: Vec<bool>,
    pub(super) docs: Vec<Option<usize>>,
    pub(super) comments: Vec<Comment>,
    pub(super) cursor: usize,
    pub(super) layout: Vec<Layout>,
    pub errors: Vec<Diagnostic>,
}

impl Parser {
    /// Lexes the whole input up front. Lexical errors become the first entries
    /// of [`Parser::errors`].
    pub fn new(mut lexer: Lexer) -> Self {
        let tokens = lexer.tokenize();
        let mut parser = Self::from_tokens(tokens);
        let lex_errors = lexer.take_errors();
        parser.errors = lex_errors.iter().map(LexError::to_diagnostic).collect();
        parser
    }

    /// Builds a parser over an already lexed token stream, trivia included.
    pub fn from_tokens(tokens: impl IntoIterator<Item = Token>) -> Self {
        let mut significant = Vec::new();
        let mut line_starts = Vec::new();
        let mut docs = Vec::new();
        let mut comments = Vec::new();

        let mut after_newline = true;
        let mut pending_doc = None;
        let mut end = 0;

        for token in tokens {
            end = token.span.end;
            if token.token_type.is_trivia() {
                if breaks_line(token.text()) {
                    after_newline = true;
                }
                if let Some(comment) = Comment::from_token(&token) {
                    if comment.kind == CommentKind::Doc {
                        pending_doc = Some(comments.len());
                    }
                    comments.push(comment);
                }
                continue;
            }

            let is_eof = token.token_type == TokenType::Eof;
            significant.push(token);
            line_starts.push(after_newline);
            docs.push(pending_doc.take());
            after_newline = false;
            if is_eof {
                break;
            }
        }

        if significant.last().is_none_or(|token| token.token_type != TokenType::Eof) {
            let (line, column) = significant
                .last()
                .map_or((1, 0), |token| (token.position.line, token.position.column));
            significant.push(Token::synthetic(TokenType::Eof, end, Position::new(line, column)));
            line_starts.push(after_newline);
            docs.push(pending_doc.take());
        }

        Self {
            tokens: significant,
            line_starts,
            docs,
            comments,
            cursor: 0,
            layout: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// All comments of the input in source order.
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn parse_file(&mut self) -> File {
        let mut file = File::new();
        self.layout.push(Layout::Column(0));

        if self.is_current(TokenType::Module)
            || (self.is_current(TokenType::Port) && self.is_peek(TokenType::Module))
        {
            let start = self.cursor;
            file.module = self.parse_module_header();
            if file.module.is_none() {
                self.synchronize(start);
            }
        }

        while !self.is_current(TokenType::Eof) {
            let start = self.cursor;
            let parsed = if self.is_current(TokenType::Import) {
                self.parse_import().map(|import| file.imports.push(import))
            } else {
                self.parse_declaration()
                    .map(|declaration| file.declarations.push(declaration))
            };

            match parsed {
                Some(()) if self.at_item_boundary() => {}
                Some(()) => {
                    self.unexpected("the end of the declaration");
                    self.synchronize(start);
                }
                None => self.synchronize(start),
            }
        }

        self.layout.pop();
        file.comments = self.comments.clone();
        file.span = Span::new(0, self.current().span.end);

        log::debug!(
            "parsed {} imports and {} declarations with {} errors",
            file.imports.len(),
            file.declarations.len(),
            self.errors.len()
        );
        file
    }

    /// Parses the whole input as one expression.
    pub fn parse_expression_only(&mut self) -> Option<Expression> {
        let expression = self.with_layout(Layout::Delimited, Self::parse_expression)?;
        self.expect_end();
        Some(expression)
    }

    /// Parses the whole input as one type expression.
    pub fn parse_type_only(&mut self) -> Option<TypeExpr> {
        let type_expr = self.with_layout(Layout::Delimited, Self::parse_type)?;
        self.expect_end();
        Some(type_expr)
    }

    /// Parses the whole input as one pattern.
    pub fn parse_pattern_only(&mut self) -> Option<Pattern> {
        let pattern = self.with_layout(Layout::Delimited, Self::parse_pattern)?;
        self.expect_end();
        Some(pattern)
    }
}

/// True when `trivia` holds a line break other than a `\` line continuation.
fn breaks_line(trivia: &str) -> bool {
    trivia.match_indices('\n').any(|(index, _)| {
        let before = &trivia[..index];
        let before = before.strip_suffix('\r').unwrap_or(before);
        !before.ends_with('\\')
    })
}
