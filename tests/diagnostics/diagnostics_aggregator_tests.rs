use elm_cst::diagnostics::position::Span;
use elm_cst::diagnostics::{
    Diagnostic, DiagnosticCounts, DiagnosticsAggregator, render_diagnostics_multi,
};
use elm_cst::parse;

fn set_no_color() {
    unsafe {
        std::env::set_var("NO_COLOR", "1");
    }
}

fn at(start: usize) -> Span {
    Span::new(start, start + 1)
}

#[test]
fn aggregator_sorts_and_groups_by_file_and_severity() {
    set_no_color();

    let diags = vec![
        Diagnostic::warning("WARN")
            .with_message("warn")
            .with_file("A.elm")
            .with_span(at(0)),
        Diagnostic::error("ERR")
            .with_message("err")
            .with_file("A.elm")
            .with_span(at(0)),
        Diagnostic::error("ERRB")
            .with_message("errb")
            .with_file("B.elm")
            .with_span(at(0)),
    ];

    let output = render_diagnostics_multi(&diags, Some(50));

    let a_idx = output.find("--> A.elm").expect("missing A.elm header");
    let b_idx = output.find("--> B.elm").expect("missing B.elm header");
    assert!(a_idx < b_idx);

    let err_idx = output.find("-- Error: err [").expect("missing error");
    let warn_idx = output.find("-- Warning: warn [").expect("missing warning");
    assert!(err_idx < warn_idx);
}

#[test]
fn aggregator_orders_by_offset_within_a_file() {
    set_no_color();

    let diags = vec![
        Diagnostic::error("LATE").with_file("A.elm").with_span(at(20)),
        Diagnostic::error("EARLY").with_file("A.elm").with_span(at(2)),
    ];

    let output = render_diagnostics_multi(&diags, None);
    let early = output.find("early").expect("missing early");
    let late = output.find("late").expect("missing late");
    assert!(early < late);
}

#[test]
fn aggregator_prints_summary_counts() {
    set_no_color();

    let diags = vec![
        Diagnostic::error("ERR").with_file("A.elm").with_span(at(0)),
        Diagnostic::warning("WARN").with_file("A.elm").with_span(at(6)),
    ];

    let report = DiagnosticsAggregator::new(&diags).report();
    assert_eq!(report.counts.errors, 1);
    assert_eq!(report.counts.warnings, 1);
    assert!(report.rendered.starts_with("Found 1 error and 1 warning.\n\n"));
}

#[test]
fn single_diagnostic_has_no_summary() {
    set_no_color();

    let diags = vec![Diagnostic::error("ERR").with_file("A.elm").with_span(at(0))];
    let output = render_diagnostics_multi(&diags, None);
    assert!(!output.contains("Found"));
    assert!(output.starts_with("--> A.elm\n"));
}

#[test]
fn aggregator_removes_duplicates() {
    set_no_color();

    let diag = Diagnostic::error("ERR")
        .with_message("same")
        .with_file("A.elm")
        .with_span(at(3));
    let diags = vec![diag.clone(), diag];

    let report = DiagnosticsAggregator::new(&diags).report();
    assert_eq!(report.counts.errors, 1);
    assert_eq!(report.rendered.matches("-- Error: err").count(), 1);
}

#[test]
fn aggregator_enforces_max_errors() {
    set_no_color();

    let diags = vec![
        Diagnostic::error("E1").with_file("A.elm").with_span(at(0)),
        Diagnostic::error("E2").with_file("A.elm").with_span(at(6)),
        Diagnostic::error("E3").with_file("A.elm").with_span(at(12)),
        Diagnostic::warning("W1").with_file("A.elm").with_span(at(18)),
    ];

    let output = render_diagnostics_multi(&diags, Some(2));
    assert!(output.starts_with("Found 3 errors and 1 warning.\n"));
    assert!(output.contains("-- Error: e1"));
    assert!(output.contains("-- Error: e2"));
    assert!(!output.contains("-- Error: e3"));
    assert!(output.contains("-- Warning: w1"));
    assert!(output.ends_with("... and 1 more errors not shown (use --max-errors to increase).\n"));
}

#[test]
fn parse_diagnostics_render_with_registered_source() {
    set_no_color();

    let source = "module Main exposing (..)\n\nx = 1 +\n\ny = ]\n";
    let result = parse(source);
    assert!(result.diagnostics.len() >= 2, "{:?}", result.diagnostics);

    let report = DiagnosticsAggregator::new(&result.diagnostics)
        .with_default_source("Main.elm", source)
        .report();

    assert_eq!(report.counts.errors, result.diagnostics.len());
    assert!(report.rendered.contains("--> Main.elm\n"));
    // The dangling `+` is reported where the next declaration starts.
    assert!(report.rendered.contains("Main.elm:5:1"));
    assert!(report.rendered.contains("Main.elm:5:5"));
    assert!(report.rendered.contains("5 | y = ]\n"));
}

#[test]
fn files_keep_their_own_sources() {
    set_no_color();

    let a_source = "a = ]\n";
    let b_source = "b = 1\nc = )\n";
    let mut diags = Vec::new();
    for (name, source) in [("A.elm", a_source), ("B.elm", b_source)] {
        diags.extend(
            parse(source)
                .diagnostics
                .into_iter()
                .map(|diag| diag.with_file(name)),
        );
    }

    let output = DiagnosticsAggregator::new(&diags)
        .with_source("A.elm", a_source)
        .with_source("B.elm", b_source)
        .render();

    assert!(output.contains("A.elm:1:5"));
    assert!(output.contains("1 | a = ]\n"));
    assert!(output.contains("B.elm:2:5"));
    assert!(output.contains("2 | c = )\n"));
}

#[test]
fn summary_counts_only_errors_and_warnings() {
    let errors_only = DiagnosticCounts {
        errors: 2,
        warnings: 0,
    };
    assert_eq!(errors_only.total(), 2);
    assert_eq!(errors_only.summary_line().as_deref(), Some("Found 2 errors."));

    let single = DiagnosticCounts {
        errors: 0,
        warnings: 1,
    };
    assert_eq!(single.summary_line(), None);
}
