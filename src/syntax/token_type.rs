use std::fmt;

use serde::Serialize;

macro_rules! define_tokens {
    (
        symbols { $($sym_name:ident => $sym_str:literal),* $(,)? }
        keywords { $($kw_name:ident => $kw_str:literal),* $(,)? }
    ) => {
        #[repr(u16)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
        pub enum TokenType {
            // Special
            Illegal,
            Eof,

            // Extras: insignificant between any two tokens
            Whitespace,
            LineComment,
            BlockComment,
            DocComment,

            // Identifiers & Literals
            UpperIdent,
            LowerIdent,
            Int,
            Float,
            String,
            Char,

            // Malformed literals (recorded as lexer errors)
            UnterminatedString,
            UnterminatedChar,
            UnterminatedBlockComment,

            // Symbols (operators & delimiters)
            $($sym_name,)*

            // Keywords (auto-generated from macro)
            $($kw_name,)*

            // Keep this as the final variant so it always reflects the enum size.
            __Count,
        }

        impl TokenType {
            pub const COUNT: usize = TokenType::__Count as usize;

            pub const fn as_usize(self) -> usize {
                self as usize
            }

            /// Every keyword in source order, paired with its spelling.
            pub const KEYWORDS: &'static [(&'static str, TokenType)] = &[
                $(($kw_str, TokenType::$kw_name),)*
            ];

            pub fn is_keyword(self) -> bool {
                matches!(self, $(TokenType::$kw_name)|*)
            }
        }

        impl fmt::Display for TokenType {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let s = match self {
                    TokenType::Illegal => "ILLEGAL",
                    TokenType::Eof => "EOF",
                    TokenType::Whitespace => "WHITESPACE",
                    TokenType::LineComment => "LINE_COMMENT",
                    TokenType::BlockComment => "BLOCK_COMMENT",
                    TokenType::DocComment => "DOC_COMMENT",
                    TokenType::UpperIdent => "UPPER_IDENT",
                    TokenType::LowerIdent => "LOWER_IDENT",
                    TokenType::Int => "INT",
                    TokenType::Float => "FLOAT",
                    TokenType::String => "STRING",
                    TokenType::Char => "CHAR",
                    TokenType::UnterminatedString => "UNTERMINATED_STRING",
                    TokenType::UnterminatedChar => "UNTERMINATED_CHAR",
                    TokenType::UnterminatedBlockComment => "UNTERMINATED_BLOCK_COMMENT",
                    $(TokenType::$sym_name => $sym_str,)*
                    $(TokenType::$kw_name => $kw_str,)*
                    TokenType::__Count => "__COUNT",
                };
                write!(f, "{}", s)
            }
        }

        /// Called by the lexer to check if a lower-case identifier is a keyword
        pub fn lookup_ident(ident: &str) -> TokenType {
            match ident {
                $($kw_str => TokenType::$kw_name,)*
                _ => TokenType::LowerIdent,
            }
        }
    };
}

// ════════════════════════════════════════════════════════════════════════════
//  TOKEN DEFINITIONS
// ════════════════════════════════════════════════════════════════════════════

define_tokens! {
    symbols {
        // Operators
        Caret    => "^",
        Asterisk => "*",
        Slash    => "/",
        Plus     => "+",
        Minus    => "-",
        And      => "&&",
        Or       => "||",
        Lt       => "<",
        Gt       => ">",

        // Separates record bases and union variants
        Pipe => "|",

        // Delimiters
        LParen    => "(",
        RParen    => ")",
        LBracket  => "[",
        RBracket  => "]",
        LBrace    => "{",
        RBrace    => "}",
        Comma     => ",",
        Assign    => "=",
        Arrow     => "->",
        Colon     => ":",
        Cons      => "::",
        Backslash => "\\",
        Underscore => "_",
        Dot       => ".",
        DoubleDot => "..",
    }

    keywords {
        Module   => "module",
        Where    => "where",
        Import   => "import",
        As       => "as",
        Exposing => "exposing",
        If       => "if",
        Then     => "then",
        Else     => "else",
        Case     => "case",
        Of       => "of",
        Let      => "let",
        In       => "in",
        Type     => "type",
        Alias    => "alias",
        Port     => "port",
        Infix    => "infix",
    }
}

impl TokenType {
    /// Extras never reach the parser's significant token stream.
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            TokenType::Whitespace
                | TokenType::LineComment
                | TokenType::BlockComment
                | TokenType::DocComment
                | TokenType::UnterminatedBlockComment
        )
    }

    pub fn is_comment(self) -> bool {
        matches!(
            self,
            TokenType::LineComment
                | TokenType::BlockComment
                | TokenType::DocComment
                | TokenType::UnterminatedBlockComment
        )
    }

    /// Tokens usable as binary operators in expressions. `|` is lexed with the
    /// operators but only separates record bases and union variants.
    pub fn is_operator(self) -> bool {
        matches!(
            self,
            TokenType::Caret
                | TokenType::Asterisk
                | TokenType::Slash
                | TokenType::Plus
                | TokenType::Minus
                | TokenType::And
                | TokenType::Or
                | TokenType::Lt
                | TokenType::Gt
        )
    }

    pub fn is_literal(self) -> bool {
        matches!(
            self,
            TokenType::Int | TokenType::Float | TokenType::String | TokenType::Char
        )
    }
}
