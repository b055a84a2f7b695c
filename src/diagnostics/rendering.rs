//! Text output for diagnostics: paths, colors and source snippets.

use std::borrow::Cow;
use std::fmt::Write;
use std::path::Path;

use super::Diagnostic;
use super::position::{LineIndex, Span};

/// Renders each diagnostic against the same source, separated by blank lines.
pub fn render_diagnostics(
    diagnostics: &[Diagnostic],
    source: Option<&str>,
    default_file: Option<&str>,
) -> String {
    diagnostics
        .iter()
        .map(|diag| diag.render(source, default_file))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Shows paths under the working directory relative to it.
pub fn render_display_path(file: &str) -> Cow<'_, str> {
    let path = Path::new(file);
    if !path.is_absolute() {
        return Cow::Borrowed(file);
    }
    std::env::current_dir()
        .ok()
        .and_then(|cwd| path.strip_prefix(cwd).ok().map(Path::to_path_buf))
        .map_or(Cow::Borrowed(file), |relative| {
            Cow::Owned(relative.to_string_lossy().into_owned())
        })
}

/// ANSI escapes, all empty when `NO_COLOR` is set.
#[derive(Debug, Clone, Copy)]
pub(super) struct Palette {
    pub header: &'static str,
    pub caret: &'static str,
    pub reset: &'static str,
}

impl Palette {
    pub(super) fn from_env() -> Self {
        if std::env::var_os("NO_COLOR").is_some() {
            Self {
                header: "",
                caret: "",
                reset: "",
            }
        } else {
            Self {
                header: "\u{1b}[33m",
                caret: "\u{1b}[31m",
                reset: "\u{1b}[0m",
            }
        }
    }
}

/// Writes the lines covered by `span`, each followed by a caret line under
/// the covered columns. An empty span still gets one caret.
pub(super) fn write_snippet(out: &mut String, index: &LineIndex<'_>, span: Span, palette: Palette) {
    let start = index.position(span.start);
    let end = index.position(span.end);
    let last_line = end.line.max(start.line);
    let gutter = last_line.to_string().len();

    let _ = writeln!(out, "{:>gutter$} |", "");

    for line in start.line..=last_line {
        let Some(text) = index.line_text(line) else {
            continue;
        };
        let len = text.chars().count();
        let from = if line == start.line { start.column.min(len) } else { 0 };
        let to = if line == last_line { end.column.min(len) } else { len };
        let width = to.saturating_sub(from).max(1);

        let _ = writeln!(out, "{line:>gutter$} | {text}");
        let _ = writeln!(
            out,
            "{:>gutter$} | {}{}{}{}",
            "",
            " ".repeat(from),
            palette.caret,
            "^".repeat(width),
            palette.reset
        );
    }
}
