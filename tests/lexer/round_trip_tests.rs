use elm_cst::{parse, tokenize};

const PROGRAM: &str = r#"module Main exposing (main, Model, Msg(..))

{-| A counter. -}

import Html exposing (Html, text)
import Html.Events as Events

type alias Model =
    { count : Int, label : String }

type Msg
    = Increment
    | Add Int

{-| Step the model. -}
update : Msg -> Model -> Model
update msg model =
    case msg of
        Increment ->
            { model | count = model.count + 1 }

        Add n ->
            let
                next = model.count + n * 2
            in
            { model | count = next }

view : Model -> Html msg
view model =
    -- render
    text (String.fromInt model.count)
"#;

const MALFORMED: &[&str] = &[
    "x = \"open string\ny = 1",
    "{- never closed {- nested -}",
    "f = 'ab' + '",
    "a $ b ¤ c",
    "\u{FEFF}main = \\\n  1",
    "s = \"\"\"tail",
    "t = \"bad \\q escape\"",
    "",
];

fn concatenated(source: &str) -> String {
    let (tokens, _) = tokenize(source);
    tokens.iter().map(|token| token.text()).collect()
}

#[test]
fn tokens_reconstruct_the_program() {
    assert_eq!(concatenated(PROGRAM), PROGRAM);
}

#[test]
fn tokens_reconstruct_malformed_input() {
    for source in MALFORMED {
        assert_eq!(&concatenated(source), source);
    }
}

#[test]
fn spans_tile_the_source() {
    for source in MALFORMED.iter().chain([&PROGRAM]) {
        let (tokens, _) = tokenize(source);
        let mut offset = 0;
        for token in &tokens {
            assert_eq!(token.span.start, offset, "gap before {}", token);
            assert_eq!(&source[token.span.start..token.span.end], token.text());
            offset = token.span.end;
        }
        assert_eq!(offset, source.len());
    }
}

/// Widens every run of spaces that separates two tokens on the same line.
fn widen_spaces(source: &str) -> String {
    let (tokens, _) = tokenize(source);
    tokens
        .iter()
        .map(|token| {
            let text = token.text();
            if token.token_type.is_trivia() && !text.is_empty() && text.chars().all(|c| c == ' ') {
                format!("{}   ", text)
            } else {
                text.to_string()
            }
        })
        .collect()
}

#[test]
fn extra_spaces_do_not_change_the_tree() {
    let original = parse(PROGRAM);
    let widened = parse(&widen_spaces(PROGRAM));

    assert!(!original.has_errors(), "{:?}", original.diagnostics);
    assert!(!widened.has_errors(), "{:?}", widened.diagnostics);
    assert_eq!(original.file.to_string(), widened.file.to_string());
    assert_ne!(original.file.span, widened.file.span);
}

#[test]
fn line_continuations_do_not_change_the_tree() {
    let plain = parse("total = price + tax\n\nother = 1\n");
    let continued = parse("total = price \\\n+ tax\n\nother = 1\n");

    assert!(!continued.has_errors(), "{:?}", continued.diagnostics);
    assert_eq!(plain.file.to_string(), continued.file.to_string());
}

#[test]
fn removing_optional_spaces_does_not_change_the_tree() {
    let spaced = parse("f ( a , b ) = { a = [ a , b ] , b = -b }\n");
    let tight = parse("f (a,b) = {a=[a,b],b= -b}\n");

    assert!(!tight.has_errors(), "{:?}", tight.diagnostics);
    assert_eq!(spaced.file.to_string(), tight.file.to_string());
}
