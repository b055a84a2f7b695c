//! Identifier lexing. Case is lexical: `Foo` and `foo` are different kinds.

use crate::syntax::token_type::{TokenType, lookup_ident};

use super::Lexer;

impl Lexer {
    pub(super) fn read_upper_identifier(&mut self) -> TokenType {
        self.read_char();
        self.reader.consume_identifier_continue_run();
        TokenType::UpperIdent
    }

    pub(super) fn read_lower_identifier(&mut self) -> TokenType {
        let start = self.current_index();
        self.read_char();
        self.reader.consume_identifier_continue_run();
        lookup_ident(self.slice_str(start, self.current_index()))
    }
}
