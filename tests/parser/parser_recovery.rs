use std::panic::{self, AssertUnwindSafe};

use elm_cst::diagnostics::Diagnostic;
use elm_cst::syntax::{file::File, lexer::Lexer, parser::Parser};

#[derive(Clone, Copy)]
struct RecoveryCase {
    name: &'static str,
    input: &'static str,
    expect_followup: Option<&'static str>,
}

fn parse_no_panic(input: &str) -> Result<(File, Vec<Diagnostic>), String> {
    panic::catch_unwind(AssertUnwindSafe(|| {
        let mut parser = Parser::new(Lexer::new(input));
        let file = parser.parse_file();
        (file, parser.errors)
    }))
    .map_err(|payload| {
        if let Some(msg) = payload.downcast_ref::<&str>() {
            (*msg).to_string()
        } else if let Some(msg) = payload.downcast_ref::<String>() {
            msg.clone()
        } else {
            "non-string panic payload".to_string()
        }
    })
}

fn has_declaration(file: &File, name: &str) -> bool {
    file.declarations
        .iter()
        .any(|declaration| declaration.name() == Some(name))
}

#[test]
fn malformed_source_corpus_recovers_without_panicking() {
    let cases = [
        RecoveryCase {
            name: "missing_closing_paren",
            input: "f = (1 + 2\nok = 1",
            expect_followup: Some("ok"),
        },
        RecoveryCase {
            name: "unclosed_list",
            input: "xs = [1, 2\nok = 1",
            expect_followup: Some("ok"),
        },
        RecoveryCase {
            name: "dangling_operator",
            input: "f = a +\nok = 1",
            expect_followup: Some("ok"),
        },
        RecoveryCase {
            name: "missing_equals",
            input: "f x\nok = 1",
            expect_followup: Some("ok"),
        },
        RecoveryCase {
            name: "stray_closing_paren",
            input: ")\nok = 1",
            expect_followup: Some("ok"),
        },
        RecoveryCase {
            name: "stray_arrow",
            input: "->\nok = 1",
            expect_followup: Some("ok"),
        },
        RecoveryCase {
            name: "stray_comma",
            input: ",\nok = 1",
            expect_followup: Some("ok"),
        },
        RecoveryCase {
            name: "extra_closing_paren",
            input: "f = g 1)\nok = 1",
            expect_followup: Some("ok"),
        },
        RecoveryCase {
            name: "reserved_where",
            input: "f = x where\nok = 1",
            expect_followup: Some("ok"),
        },
        RecoveryCase {
            name: "case_branch_without_arrow",
            input: "f =\n    case x of\n        1 2\nok = 1",
            expect_followup: Some("ok"),
        },
        RecoveryCase {
            name: "let_without_in",
            input: "f =\n    let\n        a = 1\n    a\nok = 1",
            expect_followup: Some("ok"),
        },
        RecoveryCase {
            name: "annotation_without_type",
            input: "t :\nok = 1",
            expect_followup: Some("ok"),
        },
        RecoveryCase {
            name: "constructor_argument_without_parens",
            input: "f Just x = 1\nok = 1",
            expect_followup: Some("ok"),
        },
        RecoveryCase {
            name: "empty_exposing_list",
            input: "module M exposing ()\nok = 1",
            expect_followup: Some("ok"),
        },
        RecoveryCase {
            name: "unterminated_string_then_valid_declaration",
            input: "s = \"oops\nok = 1",
            expect_followup: Some("ok"),
        },
        RecoveryCase {
            name: "illegal_character",
            input: "f = 1 # 2\nok = 1",
            expect_followup: Some("ok"),
        },
        RecoveryCase {
            name: "unterminated_comment_swallows_rest",
            input: "f = 1\n{- open\nok = 1",
            expect_followup: None,
        },
        RecoveryCase {
            name: "lambda_without_arrow",
            input: "f = \\x\nok = 1",
            expect_followup: Some("ok"),
        },
    ];

    for case in cases {
        let parsed = parse_no_panic(case.input);
        assert!(
            parsed.is_ok(),
            "parser panicked for case `{}`: {:?}",
            case.name,
            parsed.err()
        );

        let Ok((file, diagnostics)) = parsed else {
            continue;
        };

        assert!(
            !diagnostics.is_empty(),
            "expected diagnostics for malformed case `{}`",
            case.name
        );
        assert!(
            diagnostics.iter().all(|d| d.code().is_some() && d.span().is_some()),
            "expected coded diagnostics with spans for case `{}`",
            case.name
        );
        assert!(
            diagnostics
                .iter()
                .filter_map(Diagnostic::span)
                .all(|span| span.end <= case.input.len()),
            "diagnostic span out of bounds for case `{}`",
            case.name
        );
        assert_eq!(
            file.span.end,
            case.input.len(),
            "expected the file span to cover case `{}`",
            case.name
        );

        if let Some(name) = case.expect_followup {
            assert!(
                has_declaration(&file, name),
                "expected recovery to keep parsing trailing `{}` in case `{}`",
                name,
                case.name
            );
        }
    }
}

#[test]
fn several_mistakes_give_several_diagnostics() {
    let input = "a = (1\n\nb = ]\n\nc : \n\nd = 4\n";
    let (file, diagnostics) = parse_no_panic(input).unwrap_or_default();

    let codes: Vec<&str> = diagnostics.iter().filter_map(Diagnostic::code).collect();
    assert_eq!(codes, vec!["E101", "E103", "E105"]);
    assert!(has_declaration(&file, "d"));
}

#[test]
fn recovery_always_terminates_on_garbage() {
    let inputs = [
        ") ) ) ] ] }",
        "= = = =",
        "case of -> -> |",
        "let in let in",
        "((((((((((",
        "type alias = | |",
        "import",
        "module",
        "\\ \\ \\",
        "f x y z",
    ];

    for input in inputs {
        let parsed = parse_no_panic(input);
        assert!(parsed.is_ok(), "parser panicked on {:?}", input);
        let Ok((_, diagnostics)) = parsed else {
            continue;
        };
        assert!(!diagnostics.is_empty(), "no diagnostics for {:?}", input);
    }
}
