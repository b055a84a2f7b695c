use elm_cst::syntax::declaration::{Declaration, ExposedItem, Exposing};
use elm_cst::syntax::expression::{Expression, LetDeclaration};
use elm_cst::syntax::file::CommentKind;
use elm_cst::syntax::lexer::Lexer;
use elm_cst::syntax::parser::Parser;
use elm_cst::syntax::pattern::Pattern;
use elm_cst::syntax::type_expr::TypeExpr;
use elm_cst::{ParseResult, parse};

fn parse_clean(input: &str) -> ParseResult {
    let result = parse(input);
    assert!(
        !result.has_errors(),
        "Parser errors: {:?}",
        result.diagnostics
    );
    result
}

fn pattern(input: &str) -> Pattern {
    let mut parser = Parser::new(Lexer::new(input));
    match parser.parse_pattern_only() {
        Some(pattern) if parser.errors.is_empty() => pattern,
        _ => panic!("pattern {:?} failed: {:?}", input, parser.errors),
    }
}

fn type_expr(input: &str) -> TypeExpr {
    let mut parser = Parser::new(Lexer::new(input));
    match parser.parse_type_only() {
        Some(type_expr) if parser.errors.is_empty() => type_expr,
        _ => panic!("type {:?} failed: {:?}", input, parser.errors),
    }
}

fn body_of(result: &ParseResult, index: usize) -> &Expression {
    match result.file.declarations.get(index) {
        Some(Declaration::Value(value)) => &value.body,
        other => panic!("expected a value declaration, got {:?}", other),
    }
}

#[test]
fn cons_pattern_groups_to_the_right() {
    let Pattern::Cons { head, tail, .. } = pattern("x :: y :: zs") else {
        panic!("expected a cons pattern");
    };
    assert!(matches!(*head, Pattern::Var { ref name, .. } if name.as_str() == "x"));
    assert!(matches!(*tail, Pattern::Cons { .. }));
    insta::assert_snapshot!(pattern("x :: y :: zs").to_string(), @"(x :: (y :: zs))");
}

#[test]
fn arrow_type_nests_to_the_right() {
    let TypeExpr::Arrow {
        parameter, result, ..
    } = type_expr("Int -> Int -> Bool")
    else {
        panic!("expected an arrow");
    };
    assert!(matches!(*parameter, TypeExpr::Reference { .. }));
    assert!(matches!(*result, TypeExpr::Arrow { .. }));
    insta::assert_snapshot!(type_expr("Int -> Int -> Bool").to_string(), @"(Int -> (Int -> Bool))");
}

#[test]
fn application_is_one_operand() {
    let result = parse_clean("x = f x + g y\n");
    let Expression::BinOpChain(chain) = body_of(&result, 0) else {
        panic!("expected an operator chain");
    };
    assert_eq!(chain.operands.len(), 2);
    assert!(
        chain
            .operands
            .iter()
            .all(|operand| matches!(operand, Expression::Application { arguments, .. } if arguments.len() == 1))
    );
}

#[test]
fn unterminated_string_gives_one_diagnostic() {
    let result = parse("\"abc");
    assert_eq!(result.diagnostics.len(), 1);
    assert_eq!(result.diagnostics[0].code(), Some("E002"));

    let result = parse("x = \"abc");
    assert_eq!(result.diagnostics.len(), 1);
    assert_eq!(result.file.declarations.len(), 1);
}

#[test]
fn quoted_string_spanning_lines_is_one_literal() {
    let result = parse("x = \"a\nb\"\n");
    assert!(result.diagnostics.is_empty(), "{:?}", result.diagnostics);
    assert_eq!(result.file.declarations.len(), 1);
}

#[test]
fn file_without_header() {
    let result = parse_clean("main =\n    text \"hi\"\n");
    assert!(result.file.module.is_none());
    assert_eq!(result.file.declarations.len(), 1);
}

#[test]
fn empty_file() {
    let result = parse_clean("");
    assert!(result.file.module.is_none());
    assert!(result.file.declarations.is_empty());
    assert_eq!(result.tokens.len(), 1);
}

#[test]
fn exposing_forms() {
    let result = parse_clean("module A.B exposing (Maybe(..), Tree(Leaf), map, (+))\n");
    let Some(module) = &result.file.module else {
        panic!("expected a header");
    };
    assert_eq!(module.name.segments, vec!["A", "B"]);

    let Exposing::Explicit { items, .. } = &module.exposing else {
        panic!("expected explicit items");
    };
    let rendered: Vec<String> = items.iter().map(|item| item.to_string()).collect();
    assert_eq!(rendered, vec!["Maybe(..)", "Tree(Leaf)", "map", "(+)"]);
    assert!(matches!(
        &items[0],
        ExposedItem::Type {
            constructors: Some(Exposing::All { .. }),
            ..
        }
    ));
}

#[test]
fn imports_between_declarations_are_accepted() {
    let result = parse_clean("import A\nx = 1\nimport B exposing (..)\n");
    assert_eq!(result.file.imports.len(), 2);
    assert_eq!(result.file.declarations.len(), 1);
}

#[test]
fn comments_are_collected_in_order() {
    let result = parse_clean("-- one\nx = {- two -} 1\n{-| three -}\ny = 2 -- four\n");
    let kinds: Vec<CommentKind> = result.file.comments.iter().map(|c| c.kind).collect();
    assert_eq!(
        kinds,
        vec![
            CommentKind::Line,
            CommentKind::Block,
            CommentKind::Doc,
            CommentKind::Line
        ]
    );
    let contents: Vec<&str> = result.file.comments.iter().map(|c| c.content()).collect();
    assert_eq!(contents, vec!["one", "two", "three", "four"]);
    assert_eq!(
        result.file.declarations[1]
            .documentation()
            .map(|doc| doc.content()),
        Some("three")
    );
}

#[test]
fn let_accepts_annotations() {
    let result = parse_clean("f =\n    let\n        g : Int -> Int\n        g n = n\n    in\n    g 1\n");
    let Expression::Let { declarations, .. } = body_of(&result, 0) else {
        panic!("expected a let expression");
    };
    assert!(matches!(declarations[0], LetDeclaration::Annotation(_)));
    assert!(matches!(declarations[1], LetDeclaration::Value(_)));
}

#[test]
fn qualified_values_and_constructors() {
    let result = parse_clean("x = Maybe.withDefault 0 (Maybe.Just Dict.empty)\n");
    insta::assert_snapshot!(
        body_of(&result, 0).to_string(),
        @"(Maybe.withDefault 0 (Maybe.Just Dict.empty))"
    );
}

#[test]
fn hex_and_float_literals() {
    let result = parse_clean("x = [ 0xFF, 1.5e3, -2 ]\n");
    insta::assert_snapshot!(body_of(&result, 0).to_string(), @"[0xFF, 1.5e3, (-2)]");
}

#[test]
fn lambda_with_destructuring() {
    let result = parse_clean("swap = \\( a, b ) -> ( b, a )\n");
    insta::assert_snapshot!(body_of(&result, 0).to_string(), @r"(\(a, b) -> (b, a))");
}

#[test]
fn case_with_literals_and_aliases() {
    let result = parse_clean(
        "f x =\n    case x of\n        0 ->\n            \"zero\"\n\n        -1 ->\n            \"minus one\"\n\n        (Just _) as m ->\n            \"other\"\n\n        _ ->\n            'c'\n",
    );
    let Expression::Case { branches, .. } = body_of(&result, 0) else {
        panic!("expected a case expression");
    };
    let patterns: Vec<String> = branches.iter().map(|b| b.pattern.to_string()).collect();
    assert_eq!(patterns, vec!["0", "-1", "((Just _) as m)", "_"]);
}
