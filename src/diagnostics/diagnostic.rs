use std::fmt::Write;

use serde::Serialize;

use super::position::{LineIndex, Position, Span};
use super::rendering::{Palette, render_display_path, write_snippet};
use super::{ErrorCode, ErrorType, Severity, format_message};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub title: String,
    pub code: Option<String>,
    pub error_type: Option<ErrorType>,
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    pub position: Option<Position>,
    pub span: Option<Span>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub hints: Vec<String>,
}

impl Diagnostic {
    pub fn error(title: impl Into<String>) -> Self {
        Self::with_severity(Severity::Error, title)
    }

    pub fn warning(title: impl Into<String>) -> Self {
        Self::with_severity(Severity::Warning, title)
    }

    fn with_severity(severity: Severity, title: impl Into<String>) -> Self {
        Self {
            severity,
            title: title.into(),
            code: None,
            error_type: None,
            message: None,
            file: None,
            position: None,
            span: None,
            hints: Vec::new(),
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_error_type(mut self, error_type: ErrorType) -> Self {
        self.error_type = Some(error_type);
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hints.push(hint.into());
        self
    }

    /// Generic error builder using an `ErrorCode` specification
    pub fn make_error(
        err_spec: &'static ErrorCode,
        values: &[&str],
        span: Span,
        position: Position,
    ) -> Self {
        let message = format_message(err_spec.message, values);
        let hint = err_spec.hint.map(|h| format_message(h, values));

        let mut diag = Diagnostic::error(err_spec.title)
            .with_code(err_spec.code)
            .with_error_type(err_spec.error_type)
            .with_span(span)
            .with_position(position)
            .with_message(message);

        if let Some(hint_text) = hint {
            diag = diag.with_hint(hint_text);
        }

        diag
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }

    pub fn span(&self) -> Option<Span> {
        self.span
    }

    pub fn position(&self) -> Option<Position> {
        self.position
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Renders the header, message, location, snippet and hints. The snippet
    /// needs `source`; without it only the stored position is shown.
    pub fn render(&self, source: Option<&str>, default_file: Option<&str>) -> String {
        let palette = Palette::from_env();
        let mut out = String::new();

        let file = self
            .file
            .as_deref()
            .filter(|f| !f.is_empty())
            .or(default_file)
            .map_or_else(|| "<unknown>".to_string(), |f| render_display_path(f).into_owned());
        let label = match (self.error_type, self.severity) {
            (Some(error_type), _) => error_type.prefix(),
            (None, Severity::Warning) => "Warning",
            (None, _) => "Error",
        };

        let _ = writeln!(
            out,
            "{}-- {}: {} [{}]{}",
            palette.header,
            label,
            self.title.to_lowercase(),
            self.code.as_deref().unwrap_or("E000"),
            palette.reset
        );

        if let Some(message) = &self.message {
            let _ = write!(out, "\n{message}\n");
        }

        let index = source.map(LineIndex::new);
        let location = match (&index, self.span) {
            (Some(index), Some(span)) => Some(index.position(span.start)),
            _ => self.position,
        };
        if let Some(location) = location {
            let _ = write!(
                out,
                "\n  --> {}:{}:{}\n",
                file,
                location.line,
                location.column + 1
            );
        }

        if let (Some(index), Some(span)) = (&index, self.span) {
            write_snippet(&mut out, index, span, palette);
        }

        if !self.hints.is_empty() {
            out.push_str("\nHint:\n");
            for hint in &self.hints {
                let _ = writeln!(out, "  {hint}");
            }
        }

        out
    }
}
