use super::types::{ErrorCode, ErrorType};

// Lexical errors (E0xx)

pub const INVALID_CHARACTER: ErrorCode = ErrorCode {
    code: "E001",
    title: "INVALID CHARACTER",
    error_type: ErrorType::Lexer,
    message: "I do not recognize the character `{}`.",
    hint: None,
};

pub const UNTERMINATED_STRING: ErrorCode = ErrorCode {
    code: "E002",
    title: "UNTERMINATED STRING",
    error_type: ErrorType::Lexer,
    message: "This string literal is missing its closing `{}`.",
    hint: Some("Use triple quotes (\"\"\") for strings that span several lines."),
};

pub const UNTERMINATED_CHAR: ErrorCode = ErrorCode {
    code: "E003",
    title: "UNTERMINATED CHAR",
    error_type: ErrorType::Lexer,
    message: "This character literal is missing its closing `'`.",
    hint: None,
};

pub const UNTERMINATED_COMMENT: ErrorCode = ErrorCode {
    code: "E004",
    title: "UNTERMINATED COMMENT",
    error_type: ErrorType::Lexer,
    message: "This block comment is missing its closing `-}`.",
    hint: Some("Every `{-` needs a matching `-}`, including nested ones."),
};

pub const INVALID_ESCAPE: ErrorCode = ErrorCode {
    code: "E005",
    title: "INVALID ESCAPE",
    error_type: ErrorType::Lexer,
    message: "`{}` is not a valid escape sequence.",
    hint: Some("Valid escapes are \\n \\r \\t \\\" \\' \\\\ and \\u{XXXX} with 4 to 6 hex digits."),
};

pub const INVALID_CHAR_LITERAL: ErrorCode = ErrorCode {
    code: "E006",
    title: "INVALID CHARACTER LITERAL",
    error_type: ErrorType::Lexer,
    message: "A character literal must contain exactly one character, found {}.",
    hint: Some("Use double quotes for strings: \"...\"."),
};

// Syntax errors (E1xx)

pub const UNEXPECTED_TOKEN: ErrorCode = ErrorCode {
    code: "E101",
    title: "UNEXPECTED TOKEN",
    error_type: ErrorType::Parser,
    message: "Expected {}, got {}.",
    hint: None,
};

pub const MISSING_TOKEN: ErrorCode = ErrorCode {
    code: "E102",
    title: "MISSING TOKEN",
    error_type: ErrorType::Parser,
    message: "Expected {} before the end of the file.",
    hint: None,
};

pub const EXPECTED_EXPRESSION: ErrorCode = ErrorCode {
    code: "E103",
    title: "EXPECTED EXPRESSION",
    error_type: ErrorType::Parser,
    message: "Expected an expression, got {}.",
    hint: None,
};

pub const EXPECTED_PATTERN: ErrorCode = ErrorCode {
    code: "E104",
    title: "EXPECTED PATTERN",
    error_type: ErrorType::Parser,
    message: "Expected a pattern, got {}.",
    hint: Some("Patterns are names, `_`, literals, constructors, tuples, lists or records."),
};

pub const EXPECTED_TYPE: ErrorCode = ErrorCode {
    code: "E105",
    title: "EXPECTED TYPE",
    error_type: ErrorType::Parser,
    message: "Expected a type, got {}.",
    hint: None,
};

pub const AMBIGUOUS_COMPARISON: ErrorCode = ErrorCode {
    code: "E106",
    title: "AMBIGUOUS COMPARISON",
    error_type: ErrorType::Parser,
    message: "The comparison operators `{}` and `{}` cannot be chained.",
    hint: Some("Add parentheses to say which comparison happens first."),
};

pub const MALFORMED_DECLARATION: ErrorCode = ErrorCode {
    code: "E107",
    title: "MALFORMED DECLARATION",
    error_type: ErrorType::Parser,
    message: "Expected a declaration, got {}.",
    hint: Some(
        "Top-level declarations start at the first column: `name args = ...`, `name : Type`, `type ...` or `port ...`.",
    ),
};

pub const MALFORMED_LEFT_HAND_SIDE: ErrorCode = ErrorCode {
    code: "E108",
    title: "MALFORMED LEFT-HAND SIDE",
    error_type: ErrorType::Parser,
    message: "`{}` cannot be used as a function argument without parentheses.",
    hint: Some("Wrap constructor and cons patterns in parentheses: `f (Just x) = ...`."),
};
