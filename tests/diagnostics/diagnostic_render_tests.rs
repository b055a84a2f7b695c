use elm_cst::diagnostics::position::{Position, Span};
use elm_cst::diagnostics::{
    AMBIGUOUS_COMPARISON, Diagnostic, UNEXPECTED_TOKEN, render_diagnostics,
};
use elm_cst::parse;

fn set_no_color() {
    unsafe {
        std::env::set_var("NO_COLOR", "1");
    }
}

#[test]
fn renders_header_location_and_caret() {
    set_no_color();

    let source = "x = ( 1 ]\n";
    let diag = Diagnostic::make_error(
        &UNEXPECTED_TOKEN,
        &["`)`", "`]`"],
        Span::new(8, 9),
        Position::new(1, 8),
    );

    let rendered = diag.render(Some(source), Some("Main.elm"));
    let expected = "-- Syntax error: unexpected token [E101]\n\
                    \n\
                    Expected `)`, got `]`.\n\
                    \n  --> Main.elm:1:9\n \
                    |\n\
                    1 | x = ( 1 ]\n \
                    |         ^\n";
    assert_eq!(rendered, expected);
}

#[test]
fn carets_cover_the_whole_span() {
    set_no_color();

    let source = "total = count + 1\n";
    let diag = Diagnostic::error("UNEXPECTED TOKEN")
        .with_code("E101")
        .with_span(Span::new(8, 13));

    let rendered = diag.render(Some(source), None);
    assert!(rendered.contains("1 | total = count + 1\n"));
    assert!(rendered.contains(" |         ^^^^^\n"));
    assert!(rendered.contains("  --> <unknown>:1:9\n"));
}

#[test]
fn multi_line_span_marks_every_line() {
    set_no_color();

    let source = "a = [\n  1\n";
    let diag = Diagnostic::error("OPEN BRACKET").with_span(Span::new(4, 9));

    let rendered = diag.render(Some(source), Some("List.elm"));
    assert!(rendered.contains("1 | a = [\n |     ^\n"));
    assert!(rendered.contains("2 |   1\n | ^^^\n"));
}

#[test]
fn position_comes_from_the_source_when_available() {
    set_no_color();

    let source = "x = 1\ny = é + z\n";
    let offset = source.find('z').unwrap();
    let diag = Diagnostic::error("LOOK HERE")
        .with_span(Span::new(offset, offset + 1))
        .with_position(Position::new(9, 9));

    let rendered = diag.render(Some(source), Some("Chars.elm"));
    assert!(rendered.contains("Chars.elm:2:9"), "{rendered}");
}

#[test]
fn hints_are_listed_after_the_snippet() {
    set_no_color();

    let diag = Diagnostic::make_error(
        &AMBIGUOUS_COMPARISON,
        &["<", ">"],
        Span::new(6, 7),
        Position::new(1, 6),
    );
    let rendered = diag.render(Some("x = a < b > c\n"), Some("Cmp.elm"));

    assert!(rendered.starts_with("-- Syntax error: ambiguous comparison [E106]\n"));
    assert!(rendered.contains("The comparison operators `<` and `>` cannot be chained."));
    assert!(rendered.ends_with("\nHint:\n  Add parentheses to say which comparison happens first.\n"));
}

#[test]
fn lexer_errors_use_their_own_prefix() {
    set_no_color();

    let source = "s = \"abc\n";
    let result = parse(source);
    assert_eq!(result.diagnostics.len(), 1);

    let rendered = result.diagnostics[0].render(Some(source), Some("Str.elm"));
    assert!(rendered.starts_with("-- Lexer error: unterminated string [E002]\n"));
    assert!(rendered.contains("Str.elm:1:5"));
    assert!(rendered.contains("1 | s = \"abc\n"));
}

#[test]
fn no_color_output_has_no_escape_codes() {
    set_no_color();

    let source = "x = ]\n";
    let result = parse(source);
    assert!(result.has_errors());

    let rendered = render_diagnostics(&result.diagnostics, Some(source), Some("Main.elm"));
    assert!(!rendered.contains('\u{1b}'));
    assert!(rendered.contains("[E103]"));
}
