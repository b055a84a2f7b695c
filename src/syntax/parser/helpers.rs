use crate::diagnostics::position::{Position, Span};
use crate::diagnostics::{Diagnostic, ErrorCode, MISSING_TOKEN, UNEXPECTED_TOKEN};
use crate::syntax::name::{Name, QualifiedName};
use crate::syntax::token::Token;
use crate::syntax::token_type::TokenType;

use super::{Layout, Parser};

impl Parser {
    // Token navigation

    pub(super) fn current(&self) -> &Token {
        self.peek_n(0)
    }

    pub(super) fn peek(&self) -> &Token {
        self.peek_n(1)
    }

    /// The token `n` places after the cursor, or the final `Eof`.
    pub(super) fn peek_n(&self, n: usize) -> &Token {
        let last = self.tokens.len() - 1;
        &self.tokens[(self.cursor + n).min(last)]
    }

    pub(super) fn previous(&self) -> Option<&Token> {
        self.cursor.checked_sub(1).and_then(|index| self.tokens.get(index))
    }

    /// Consumes the current token. The cursor never moves past `Eof`.
    pub(super) fn next_token(&mut self) -> Token {
        let token = self.current().clone();
        if token.token_type != TokenType::Eof {
            self.cursor += 1;
        }
        token
    }

    pub(super) fn is_current(&self, token_type: TokenType) -> bool {
        self.current().token_type == token_type
    }

    pub(super) fn is_peek(&self, token_type: TokenType) -> bool {
        self.peek().token_type == token_type
    }

    /// Consumes the current token if it has the given type.
    pub(super) fn eat(&mut self, token_type: TokenType) -> Option<Token> {
        if self.is_current(token_type) {
            Some(self.next_token())
        } else {
            None
        }
    }

    /// Consumes the current token if it has the given type, otherwise reports it.
    pub(super) fn expect(&mut self, token_type: TokenType) -> Option<Token> {
        if self.is_current(token_type) {
            return Some(self.next_token());
        }
        self.unexpected(&describe_expected(token_type));
        None
    }

    pub(super) fn expect_name(&mut self, token_type: TokenType) -> Option<Name> {
        let token = self.expect(token_type)?;
        Some(Name::new(token.text(), token.span))
    }

    // Layout

    /// True when a line break separates the current token from the previous one.
    pub(super) fn starts_line(&self) -> bool {
        let index = self.cursor.min(self.line_starts.len().saturating_sub(1));
        self.line_starts.get(index).copied().unwrap_or(true)
    }

    /// True when the current token cannot continue the expression being parsed,
    /// because it is `Eof` or sits on a new line at or left of the layout column.
    /// Inside brackets only a line starting a new top-level item ends it.
    pub(super) fn layout_ends(&self) -> bool {
        if self.is_current(TokenType::Eof) {
            return true;
        }
        match self.layout.last() {
            Some(Layout::Column(column)) => {
                self.starts_line() && self.current().position.column <= *column
            }
            Some(Layout::Delimited) => self.at_top_level_start(),
            None => false,
        }
    }

    pub(super) fn with_layout<T>(
        &mut self,
        layout: Layout,
        parse: impl FnOnce(&mut Self) -> Option<T>,
    ) -> Option<T> {
        self.layout.push(layout);
        let result = parse(self);
        self.layout.pop();
        result
    }

    /// True at `Eof` or at a token that opens a line in the first column.
    pub(super) fn at_item_boundary(&self) -> bool {
        self.is_current(TokenType::Eof)
            || (self.starts_line() && self.current().position.column == 0)
    }

    // Span/position utilities

    /// Span from `start` to the end of the last consumed token.
    pub(super) fn span_from(&self, start: usize) -> Span {
        let end = self.previous().map_or(start, |token| token.span.end);
        Span::new(start, end.max(start))
    }

    /// Line/column of the token starting at byte `offset`.
    pub(super) fn position_at(&self, offset: usize) -> Position {
        match self.tokens.binary_search_by_key(&offset, |token| token.span.start) {
            Ok(index) => self.tokens[index].position,
            Err(_) => self.current().position,
        }
    }

    /// `Foo`, `Foo.Bar` or, with `allow_value`, `Foo.Bar.baz`. The current
    /// token must be an identifier. Segments only join when the dots touch them.
    pub(super) fn parse_qualified_name(&mut self, allow_value: bool) -> QualifiedName {
        let first = self.next_token();
        let mut segments = vec![first.text().to_string()];
        let mut span = first.span;

        if first.token_type == TokenType::UpperIdent {
            while self.is_current(TokenType::Dot)
                && self.previous().is_some_and(|prev| prev.touches(self.current()))
                && self.current().touches(self.peek())
            {
                let is_value = match self.peek().token_type {
                    TokenType::UpperIdent => false,
                    TokenType::LowerIdent if allow_value => true,
                    _ => break,
                };
                self.next_token(); // '.'
                let segment = self.next_token();
                segments.push(segment.text().to_string());
                span = span.merge(segment.span);
                if is_value {
                    break;
                }
            }
        }

        QualifiedName::new(segments, span)
    }

    /// Parses `item (, item)* close` after the opening delimiter was consumed.
    /// A failed item skips ahead to `close`, keeping the items parsed so far.
    pub(super) fn parse_comma_separated<T>(
        &mut self,
        close: TokenType,
        mut parse_item: impl FnMut(&mut Self) -> Option<T>,
    ) -> Option<(Vec<T>, Token)> {
        self.layout.push(Layout::Delimited);
        let mut items = Vec::new();
        let mut failed = false;

        if !self.is_current(close) {
            loop {
                match parse_item(self) {
                    Some(item) => items.push(item),
                    None => {
                        failed = true;
                        break;
                    }
                }
                if self.eat(TokenType::Comma).is_none() {
                    break;
                }
            }
        }

        let closing = if failed { None } else { self.expect(close) };
        let closing = closing.or_else(|| self.skip_to_closing(close));
        self.layout.pop();
        closing.map(|token| (items, token))
    }

    /// Skips to the matching `close` and consumes it. Gives up at `Eof`, at a
    /// mismatched closer, or at the start of the next top-level item.
    pub(super) fn skip_to_closing(&mut self, close: TokenType) -> Option<Token> {
        let mut depth = 0usize;
        let mut skipped = 0usize;
        loop {
            let token_type = self.current().token_type;
            if token_type == TokenType::Eof || self.at_top_level_start() {
                break;
            }
            if depth == 0 && token_type == close {
                log::debug!("skipped {} tokens to reach `{}`", skipped, close);
                return Some(self.next_token());
            }
            match token_type {
                TokenType::LParen | TokenType::LBracket | TokenType::LBrace => depth += 1,
                TokenType::RParen | TokenType::RBracket | TokenType::RBrace => {
                    if depth == 0 {
                        break;
                    }
                    depth -= 1;
                }
                _ => {}
            }
            self.next_token();
            skipped += 1;
        }
        None
    }

    fn at_top_level_start(&self) -> bool {
        self.layout.first() == Some(&Layout::Column(0))
            && self.starts_line()
            && self.current().position.column == 0
            && self.cursor > 0
    }

    /// Skips to the next token that can begin a top-level item. Always moves
    /// past the token at `start` so recovery makes progress.
    pub(super) fn synchronize(&mut self, start: usize) {
        if self.cursor == start {
            self.next_token();
        }
        let from = self.cursor;
        while !self.is_current(TokenType::Eof)
            && !(self.at_item_boundary() && can_start_item(self.current().token_type))
        {
            self.next_token();
        }
        log::debug!(
            "recovered after {} skipped tokens at {}",
            self.cursor - from,
            self.current().position
        );
    }

    // Error handling

    pub(super) fn error_at_current(&mut self, spec: &'static ErrorCode, values: &[&str]) {
        let token = self.current();
        // The lexer already reported these.
        if matches!(
            token.token_type,
            TokenType::Illegal | TokenType::UnterminatedString | TokenType::UnterminatedChar
        ) {
            return;
        }
        let diag = Diagnostic::make_error(spec, values, token.span, token.position);
        self.errors.push(diag);
    }

    /// Reports that `expected` was wanted where the current token stands.
    pub(super) fn unexpected(&mut self, expected: &str) {
        if self.is_current(TokenType::Eof) {
            self.error_at_current(&MISSING_TOKEN, &[expected]);
        } else {
            let got = describe_token(self.current());
            self.error_at_current(&UNEXPECTED_TOKEN, &[expected, got.as_str()]);
        }
    }

    pub(super) fn expect_end(&mut self) {
        if !self.is_current(TokenType::Eof) {
            self.unexpected("the end of the input");
        }
    }
}

fn can_start_item(token_type: TokenType) -> bool {
    matches!(
        token_type,
        TokenType::LowerIdent
            | TokenType::Type
            | TokenType::Port
            | TokenType::Import
            | TokenType::LParen
            | TokenType::LBrace
            | TokenType::Underscore
    )
}

pub(super) fn describe_expected(token_type: TokenType) -> String {
    match token_type {
        TokenType::LowerIdent => "a lower-case name".to_string(),
        TokenType::UpperIdent => "an upper-case name".to_string(),
        TokenType::Eof => "the end of the file".to_string(),
        other => format!("`{}`", other),
    }
}

pub(super) fn describe_token(token: &Token) -> String {
    match token.token_type {
        TokenType::Eof => "the end of the file".to_string(),
        _ => format!("`{}`", token.text()),
    }
}
