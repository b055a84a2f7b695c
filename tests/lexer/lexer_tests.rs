use elm_cst::syntax::lexer::{LexErrorKind, Lexer};
use elm_cst::syntax::token_type::TokenType;
use elm_cst::tokenize;

/// One line per significant token: `line:column KIND "text"`.
fn describe(input: &str) -> String {
    let (tokens, _) = tokenize(input);
    tokens
        .iter()
        .filter(|token| !token.token_type.is_trivia())
        .map(|token| {
            format!(
                "{}:{} {} {:?}",
                token.position.line,
                token.position.column,
                token.token_type,
                token.text()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn error_kinds(input: &str) -> Vec<LexErrorKind> {
    let (_, errors) = tokenize(input);
    errors.into_iter().map(|error| error.kind).collect()
}

#[test]
fn declaration_tokens() {
    insta::assert_snapshot!(describe("add x y =\n    x + y"), @r#"
    1:0 LOWER_IDENT "add"
    1:4 LOWER_IDENT "x"
    1:6 LOWER_IDENT "y"
    1:8 = "="
    2:4 LOWER_IDENT "x"
    2:6 + "+"
    2:8 LOWER_IDENT "y"
    2:9 EOF ""
    "#);
}

#[test]
fn header_tokens() {
    insta::assert_snapshot!(describe("module Main exposing (..)"), @r#"
    1:0 module "module"
    1:7 UPPER_IDENT "Main"
    1:12 exposing "exposing"
    1:21 ( "("
    1:22 .. ".."
    1:24 ) ")"
    1:25 EOF ""
    "#);
}

#[test]
fn literal_tokens() {
    insta::assert_snapshot!(describe(r#"[ 42, 0x1F, 3.14, 1e-3, "hi\n", 'a', '\u{1F600}' ]"#), @r#"
    1:0 [ "["
    1:2 INT "42"
    1:4 , ","
    1:6 INT "0x1F"
    1:10 , ","
    1:12 FLOAT "3.14"
    1:16 , ","
    1:18 FLOAT "1e-3"
    1:22 , ","
    1:24 STRING "\"hi\\n\""
    1:30 , ","
    1:32 CHAR "'a'"
    1:35 , ","
    1:37 CHAR "'\\u{1F600}'"
    1:49 ] "]"
    1:50 EOF ""
    "#);
}

#[test]
fn qualified_names_are_separate_tokens() {
    insta::assert_snapshot!(describe("Html.Attributes.class"), @r#"
    1:0 UPPER_IDENT "Html"
    1:4 . "."
    1:5 UPPER_IDENT "Attributes"
    1:15 . "."
    1:16 LOWER_IDENT "class"
    1:21 EOF ""
    "#);
}

#[test]
fn comments_are_trivia() {
    let (tokens, errors) = tokenize("x -- note\n{- block {- nested -} -}\n{-| doc -}\ny");
    assert!(errors.is_empty());
    let kinds: Vec<TokenType> = tokens
        .iter()
        .map(|token| token.token_type)
        .filter(|kind| kind.is_comment())
        .collect();
    assert_eq!(
        kinds,
        vec![
            TokenType::LineComment,
            TokenType::BlockComment,
            TokenType::DocComment
        ]
    );
}

#[test]
fn multiline_string_keeps_newlines() {
    let (tokens, errors) = tokenize("\"\"\"one\ntwo\"\"\"");
    assert!(errors.is_empty());
    assert_eq!(tokens[0].token_type, TokenType::String);
    assert_eq!(tokens[0].text(), "\"\"\"one\ntwo\"\"\"");
    assert_eq!(tokens[1].position.line, 2);
}

#[test]
fn unterminated_constructs_report_once() {
    assert_eq!(
        error_kinds("\"abc"),
        vec![LexErrorKind::UnterminatedString {
            triple_quoted: false
        }]
    );
    assert_eq!(
        error_kinds("\"\"\"abc\n"),
        vec![LexErrorKind::UnterminatedString {
            triple_quoted: true
        }]
    );
    assert_eq!(error_kinds("{- open {- inner -}"), vec![LexErrorKind::UnterminatedComment]);
    assert_eq!(error_kinds("'a"), vec![LexErrorKind::UnterminatedChar]);
}

#[test]
fn bad_input_keeps_lexing() {
    assert_eq!(
        error_kinds("a $ b \"\\q\" ''"),
        vec![
            LexErrorKind::InvalidCharacter('$'),
            LexErrorKind::InvalidEscape("\\q".to_string()),
            LexErrorKind::InvalidCharLiteral(0),
        ]
    );
    insta::assert_snapshot!(describe("a $ b"), @r#"
    1:0 LOWER_IDENT "a"
    1:2 ILLEGAL "$"
    1:4 LOWER_IDENT "b"
    1:5 EOF ""
    "#);
}

#[test]
fn negative_numbers_are_two_tokens() {
    insta::assert_snapshot!(describe("-1"), @r#"
    1:0 - "-"
    1:1 INT "1"
    1:2 EOF ""
    "#);
}

#[test]
fn lexer_iterator_is_lazy_and_finite() {
    let mut lexer = Lexer::new("a b");
    let first = lexer.next();
    assert_eq!(first.map(|token| token.token_type), Some(TokenType::LowerIdent));
    // The space, `b`, then `Eof`; nothing after it.
    assert_eq!(lexer.count(), 3);
}
