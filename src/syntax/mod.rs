//! Lexing and parsing of Elm source into a concrete syntax tree.

pub mod declaration;
pub mod expression;
pub mod file;
pub mod fixity;
pub mod lexeme;
pub mod lexer;
pub mod name;
pub mod parser;
pub mod pattern;
pub mod token;
pub mod token_type;
pub mod type_expr;

pub use crate::diagnostics::position;
