use elm_cst::diagnostics::position::{LineIndex, Position, Span};
use elm_cst::parse;
use elm_cst::syntax::declaration::{Declaration, LeftHandSide};
use elm_cst::syntax::expression::Expression;

const SOURCE: &str = "module Main exposing (..)

import Dict exposing (Dict)

{-| Sum of squares. -}
sumSquares : List Int -> Int
sumSquares xs =
    List.foldl (\\x acc -> x * x + acc) 0 xs

type Shape
    = Circle Float
    | Rect Float Float
";

fn text(span: Span) -> &'static str {
    span.slice(SOURCE).unwrap_or("<invalid span>")
}

#[test]
fn declaration_spans_cover_their_source() {
    let result = parse(SOURCE);
    assert!(!result.has_errors(), "{:?}", result.diagnostics);

    let spans: Vec<&str> = result
        .file
        .declarations
        .iter()
        .map(|decl| text(decl.span()))
        .collect();
    assert_eq!(
        spans,
        vec![
            "sumSquares : List Int -> Int",
            "sumSquares xs =\n    List.foldl (\\x acc -> x * x + acc) 0 xs",
            "type Shape\n    = Circle Float\n    | Rect Float Float",
        ]
    );
}

#[test]
fn header_and_import_spans() {
    let result = parse(SOURCE);
    let module = result.file.module.as_ref().map(|m| text(m.span));
    assert_eq!(module, Some("module Main exposing (..)"));

    let imports: Vec<&str> = result.file.imports.iter().map(|i| text(i.span)).collect();
    assert_eq!(imports, vec!["import Dict exposing (Dict)"]);
}

#[test]
fn expression_spans_nest() {
    let result = parse(SOURCE);
    let Some(Declaration::Value(value)) = result.file.declarations.get(1) else {
        panic!("expected a value declaration");
    };
    let LeftHandSide::Function { arguments, .. } = &value.left else {
        panic!("expected a function left-hand side");
    };
    assert_eq!(text(arguments[0].span()), "xs");

    let Expression::Application {
        function,
        arguments,
        span,
    } = &value.body
    else {
        panic!("expected an application");
    };
    assert_eq!(text(*span), "List.foldl (\\x acc -> x * x + acc) 0 xs");
    assert_eq!(text(function.span()), "List.foldl");

    let pieces: Vec<&str> = arguments.iter().map(|arg| text(arg.span())).collect();
    assert_eq!(pieces, vec!["(\\x acc -> x * x + acc)", "0", "xs"]);

    let Expression::Parenthesized { inner, .. } = &arguments[0] else {
        panic!("expected parentheses");
    };
    let Expression::Lambda { body, .. } = inner.as_ref() else {
        panic!("expected a lambda");
    };
    assert_eq!(text(body.span()), "x * x + acc");
}

#[test]
fn documentation_span_points_at_the_comment() {
    let result = parse(SOURCE);
    let doc = result
        .file
        .declarations
        .first()
        .and_then(Declaration::documentation)
        .map(|doc| text(doc.span));
    assert_eq!(doc, Some("{-| Sum of squares. -}"));
}

#[test]
fn diagnostic_positions_match_line_index() {
    let source = "ok = 1\n\nbad = (1,\n\nworse = ]\n";
    let result = parse(source);
    let index = LineIndex::new(source);

    assert_eq!(result.diagnostics.len(), 2);
    for diagnostic in &result.diagnostics {
        let (Some(span), Some(position)) = (diagnostic.span(), diagnostic.position()) else {
            panic!("diagnostic without location: {:?}", diagnostic);
        };
        assert_eq!(index.position(span.start), position);
    }
    assert_eq!(result.diagnostics[0].position(), Some(Position::new(5, 0)));
    assert_eq!(result.diagnostics[1].position(), Some(Position::new(5, 8)));
}

#[test]
fn token_positions_use_char_columns() {
    let (tokens, _) = elm_cst::tokenize("s = \"é\" ++ x");
    let x = tokens.iter().rev().find(|token| token.text() == "x");
    assert_eq!(x.map(|token| token.position), Some(Position::new(1, 11)));
}
