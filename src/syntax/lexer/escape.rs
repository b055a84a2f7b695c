//! Escape sequence handling for string and character literals

use crate::diagnostics::position::Position;

use super::{LexErrorKind, Lexer};

impl Lexer {
    /// Validate an escape sequence. Entry: the cursor is on the backslash.
    ///
    /// Valid escapes are `\n \r \t \" \' \\` and `\u{XXXX}` with 4 to 6 hex
    /// digits. Anything else is recorded as an invalid escape and lexing goes
    /// on. A backslash at the end of input records nothing; the caller reports
    /// the unterminated literal instead.
    pub(super) fn read_escape_sequence(&mut self) {
        let start = self.current_index();
        let position = self.cursor_position();
        self.read_char(); // '\\'

        match self.current_char() {
            Some('n' | 'r' | 't' | '"' | '\'' | '\\') => self.read_char(),
            Some('u') if self.peek_char() == Some('{') => {
                self.read_char(); // 'u'
                self.read_char(); // '{'
                let digits_start = self.current_index();
                self.reader.consume_hex_run();
                let digits = self.current_index() - digits_start;

                if self.current_char() == Some('}') && (4..=6).contains(&digits) {
                    self.read_char();
                    return;
                }

                // Invalid `\u{...}`: swallow up to the closing brace on this line.
                self.reader.advance_until_any(b"}\"'\n\r");
                if self.current_char() == Some('}') {
                    self.read_char();
                }
                self.push_invalid_escape(start, position);
            }
            None => {}
            Some('\n' | '\r') => self.push_invalid_escape(start, position),
            Some(_) => {
                self.read_char();
                self.push_invalid_escape(start, position);
            }
        }
    }

    fn push_invalid_escape(&mut self, start: usize, position: Position) {
        let text = self.slice_str(start, self.current_index()).to_string();
        self.push_error(LexErrorKind::InvalidEscape(text), start, position);
    }
}
