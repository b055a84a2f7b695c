//! Comment handling (line comments, block comments and documentation blocks)

use crate::syntax::token::Token;
use crate::syntax::token_type::TokenType;

use super::{LexErrorKind, Lexer};

impl Lexer {
    /// Read a line comment (`-- ...`) up to, but not including, the line break.
    pub(super) fn read_line_comment(&mut self) -> Token {
        debug_assert!(
            self.current_char() == Some('-') && self.peek_char() == Some('-'),
            "read_line_comment expects `--` at the cursor"
        );
        let start = self.current_index();
        let position = self.cursor_position();

        self.reader.advance_until_any(b"\n\r");

        self.token_from(TokenType::LineComment, start, position)
    }

    /// Read a block comment `{- ... -}` or a documentation block `{-| ... -}`.
    ///
    /// The opener decides the kind: `{-|` is always documentation. Comments
    /// nest, so every `{-` inside the body needs its own `-}`. Reaching end of
    /// input yields an `UnterminatedBlockComment` token covering the rest of
    /// the file and one error.
    pub(super) fn read_block_comment(&mut self) -> Token {
        debug_assert!(
            self.current_char() == Some('{') && self.peek_char() == Some('-'),
            "read_block_comment expects `{{-` at the cursor"
        );
        let start = self.current_index();
        let position = self.cursor_position();
        let is_doc = self.peek_n(2) == Some('|');

        self.read_char(); // '{'
        self.read_char(); // '-'
        if is_doc {
            self.read_char(); // '|'
        }

        let mut nesting_depth = 1usize;

        loop {
            self.reader.advance_until_any(b"{-");
            match (self.current_byte(), self.peek_byte()) {
                (None, _) => break,
                (Some(b'-'), Some(b'}')) => {
                    self.read_char(); // '-'
                    self.read_char(); // '}'
                    nesting_depth -= 1;
                    if nesting_depth == 0 {
                        let token_type = if is_doc {
                            TokenType::DocComment
                        } else {
                            TokenType::BlockComment
                        };
                        return self.token_from(token_type, start, position);
                    }
                }
                (Some(b'{'), Some(b'-')) => {
                    self.read_char(); // '{'
                    self.read_char(); // '-'
                    nesting_depth += 1;
                }
                _ => self.read_char(),
            }
        }

        self.push_error(LexErrorKind::UnterminatedComment, start, position);
        self.token_from(TokenType::UnterminatedBlockComment, start, position)
    }
}
