//! Helper utilities for lexing

/// Characters that make up the whitespace extras: ordinary whitespace plus the
/// byte-order mark and the zero-width joiners Elm editors like to leave behind.
pub(super) fn is_extra_char(ch: char) -> bool {
    matches!(ch, '\u{FEFF}' | '\u{2060}' | '\u{200B}') || ch.is_whitespace()
}

/// A backslash directly followed by a newline (`\` `\n` or `\` `\r\n`) is a
/// line continuation, given the two chars after the backslash.
pub(super) fn starts_line_continuation(next: Option<char>, after_next: Option<char>) -> bool {
    match next {
        Some('\n') => true,
        Some('\r') => after_next == Some('\n'),
        _ => false,
    }
}
