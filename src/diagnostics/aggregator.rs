use std::collections::{HashMap, HashSet};
use std::fmt::Write;

use super::position::Span;
use super::{Diagnostic, Severity, render_display_path};

/// Errors shown per report unless the caller asks for more.
pub const DEFAULT_MAX_ERRORS: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DiagnosticCounts {
    pub errors: usize,
    pub warnings: usize,
}

impl DiagnosticCounts {
    fn add(&mut self, severity: Severity) {
        match severity {
            Severity::Error => self.errors += 1,
            Severity::Warning => self.warnings += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.errors + self.warnings
    }

    /// `Found 2 errors and 1 warning.`, or nothing for a single diagnostic.
    pub fn summary_line(&self) -> Option<String> {
        if self.total() <= 1 {
            return None;
        }
        let parts: Vec<String> = [
            (self.errors, "error"),
            (self.warnings, "warning"),
        ]
        .into_iter()
        .filter(|(count, _)| *count > 0)
        .map(|(count, noun)| {
            let suffix = if count == 1 { "" } else { "s" };
            format!("{count} {noun}{suffix}")
        })
        .collect();

        Some(format!("Found {}.", parts.join(" and ")))
    }
}

#[derive(Debug, Clone)]
pub struct DiagnosticsReport {
    pub counts: DiagnosticCounts,
    pub rendered: String,
}

/// Two diagnostics with the same key are reported once.
type DedupKey<'d> = (
    &'d str,
    Option<Span>,
    Severity,
    Option<&'d str>,
    &'d str,
    Option<&'d str>,
);

/// Collects diagnostics from one or more files into a single report.
///
/// Diagnostics are de-duplicated, then ordered by file, offset and severity,
/// and printed in one group per file. Sources are never read from disk here;
/// register the text of each file with [`with_source`](Self::with_source) to
/// get snippets.
pub struct DiagnosticsAggregator<'a> {
    diagnostics: &'a [Diagnostic],
    max_errors: Option<usize>,
    default_file: Option<String>,
    sources: HashMap<String, String>,
}

impl<'a> DiagnosticsAggregator<'a> {
    pub fn new(diagnostics: &'a [Diagnostic]) -> Self {
        Self {
            diagnostics,
            max_errors: None,
            default_file: None,
            sources: HashMap::new(),
        }
    }

    pub fn with_max_errors(mut self, max_errors: Option<usize>) -> Self {
        self.max_errors = max_errors;
        self
    }

    pub fn with_source(mut self, file: impl Into<String>, source: impl Into<String>) -> Self {
        self.sources.insert(file.into(), source.into());
        self
    }

    /// Registers `source` and uses `file` for diagnostics that carry no file.
    pub fn with_default_source(
        mut self,
        file: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        let file = file.into();
        self.sources.insert(file.clone(), source.into());
        self.default_file = Some(file);
        self
    }

    fn file_of<'d>(&'d self, diag: &'d Diagnostic) -> &'d str {
        diag.file()
            .filter(|file| !file.is_empty())
            .or(self.default_file.as_deref())
            .unwrap_or("")
    }

    fn sort_key<'d>(&'d self, diag: &'d Diagnostic) -> (&'d str, usize, u8, &'d str, &'d str) {
        (
            self.file_of(diag),
            diag.span().map_or(usize::MAX, |span| span.start),
            severity_rank(diag.severity()),
            diag.message().unwrap_or(""),
            diag.title(),
        )
    }

    pub fn report(&self) -> DiagnosticsReport {
        let mut seen: HashSet<DedupKey<'_>> = HashSet::new();
        let mut unique: Vec<(usize, &Diagnostic)> = self
            .diagnostics
            .iter()
            .enumerate()
            .filter(|&(_, diag)| {
                seen.insert((
                    self.file_of(diag),
                    diag.span(),
                    diag.severity(),
                    diag.code(),
                    diag.title(),
                    diag.message(),
                ))
            })
            .collect();

        let mut counts = DiagnosticCounts::default();
        for (_, diag) in &unique {
            counts.add(diag.severity());
        }

        unique.sort_by(|(a_index, a), (b_index, b)| {
            self.sort_key(a)
                .cmp(&self.sort_key(b))
                .then(a_index.cmp(b_index))
        });

        let max_errors = self.max_errors.unwrap_or(usize::MAX);
        let mut errors_shown = 0usize;
        let shown: Vec<&Diagnostic> = unique
            .into_iter()
            .map(|(_, diag)| diag)
            .filter(|diag| {
                if !diag.is_error() {
                    return true;
                }
                errors_shown += 1;
                errors_shown <= max_errors
            })
            .collect();
        let errors_shown = errors_shown.min(max_errors);

        let mut rendered = String::new();
        if let Some(summary) = counts.summary_line() {
            let _ = write!(rendered, "{summary}\n\n");
        }

        let default_file = self.default_file.as_deref();
        let groups: Vec<String> = shown
            .chunk_by(|a, b| self.file_of(a) == self.file_of(b))
            .map(|group| {
                let file = self.file_of(group[0]);
                let source = self.sources.get(file).map(String::as_str);
                let heading = if file.is_empty() {
                    "<unknown>".to_string()
                } else {
                    render_display_path(file).into_owned()
                };
                let bodies: Vec<String> = group
                    .iter()
                    .map(|diag| diag.render(source, default_file))
                    .collect();
                format!("--> {heading}\n{}", bodies.join("\n"))
            })
            .collect();
        rendered.push_str(&groups.join("\n"));

        let hidden = counts.errors.saturating_sub(errors_shown);
        if hidden > 0 {
            if !rendered.ends_with('\n') {
                rendered.push('\n');
            }
            let _ = writeln!(
                rendered,
                "... and {hidden} more errors not shown (use --max-errors to increase)."
            );
        }

        DiagnosticsReport { counts, rendered }
    }

    pub fn render(&self) -> String {
        self.report().rendered
    }
}

/// Renders diagnostics that each carry their own file, without snippets.
pub fn render_diagnostics_multi(diagnostics: &[Diagnostic], max_errors: Option<usize>) -> String {
    DiagnosticsAggregator::new(diagnostics)
        .with_max_errors(max_errors)
        .render()
}

fn severity_rank(severity: Severity) -> u8 {
    match severity {
        Severity::Error => 0,
        Severity::Warning => 1,
    }
}
