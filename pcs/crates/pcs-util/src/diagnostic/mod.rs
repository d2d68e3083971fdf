//! Diagnostic module - Error and warning reporting infrastructure.
//!
//! This module provides types for creating, collecting, and rendering
//! scanner diagnostics (errors, warnings, notes, and help messages).
//!
//! # Examples
//!
//! ```
//! use pcs_util::diagnostic::{DiagnosticBuilder, Handler};
//! use pcs_util::Span;
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unexpected end of input")
//!     .span(Span::DUMMY)
//!     .emit(&handler);
//!
//! assert!(handler.has_errors());
//! ```

mod builder;
mod codes;

pub use builder::DiagnosticBuilder;
pub use codes::{DiagnosticCode, E_LEXER_UNTERMINATED_STRING};

use crate::span::SourceMap;
use crate::Span;
use std::cell::RefCell;
use std::fmt;

/// Diagnostic severity level
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    /// An error that makes the result untrustworthy
    Error,
    /// A warning that doesn't affect the result
    Warning,
    /// Additional information about a diagnostic
    Note,
    /// A suggestion for fixing an issue
    Help,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
            Level::Note => write!(f, "note"),
            Level::Help => write!(f, "help"),
        }
    }
}

/// A diagnostic message with severity and location
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Additional notes for context
    pub notes: Vec<String>,
    /// Help suggestions for fixing the issue
    pub helps: Vec<String>,
}

impl Diagnostic {
    /// Render the diagnostic against the file its span points into.
    ///
    /// Produces a header, a `-->` location line, the offending source line
    /// with a caret underline, then any notes and helps. Falls back to the
    /// header plus notes when the span's file is not in `sources`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pcs_util::diagnostic::DiagnosticBuilder;
    /// use pcs_util::span::SourceMap;
    /// use pcs_util::Span;
    ///
    /// let mut sources = SourceMap::new();
    /// let id = sources.add_file("main.pcs", "x = \"abc");
    /// let diag = DiagnosticBuilder::error("unterminated string literal")
    ///     .span(Span::new(4, 8, 1, 5).with_file_id(id))
    ///     .build();
    ///
    /// let rendered = diag.render(&sources);
    /// assert!(rendered.starts_with("error: unterminated string literal"));
    /// assert!(rendered.contains("--> main.pcs:1:5"));
    /// assert!(rendered.contains("    ^^^^"));
    /// ```
    pub fn render(&self, sources: &SourceMap) -> String {
        let mut out = String::new();
        match self.code {
            Some(code) => out.push_str(&format!("{}[{}]: {}\n", self.level, code, self.message)),
            None => out.push_str(&format!("{}: {}\n", self.level, self.message)),
        }

        if let Some(file) = sources.get(self.span.file_id) {
            let line_number = self.span.line as usize;
            let width = line_number.to_string().len();
            out.push_str(&format!(
                "{:>width$}--> {}:{}\n",
                "",
                file.name(),
                self.span,
                width = width + 1
            ));
            if let Some(line) = file.line_at(line_number) {
                let underline = file
                    .extract_range(self.span.start, self.span.end)
                    .map(|text| text.split('\n').next().unwrap_or("").chars().count())
                    .unwrap_or(0)
                    .max(1);
                let indent = (self.span.column as usize).saturating_sub(1);
                out.push_str(&format!("{:>width$} |\n", "", width = width));
                out.push_str(&format!("{} | {}\n", line_number, line));
                out.push_str(&format!(
                    "{:>width$} | {}{}\n",
                    "",
                    " ".repeat(indent),
                    "^".repeat(underline),
                    width = width
                ));
            }
        }

        for note in &self.notes {
            out.push_str(&format!("  = note: {}\n", note));
        }
        for help in &self.helps {
            out.push_str(&format!("  = help: {}\n", help));
        }
        out
    }
}

/// Handler for collecting and reporting diagnostics
///
/// The `Handler` collects diagnostics through a shared reference so that a
/// scanner can report while the caller keeps ownership.
pub struct Handler {
    /// Collected diagnostics
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
        }
    }

    /// Emit a pre-built diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .borrow()
            .iter()
            .any(|d| d.level == Level::Error)
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == Level::Error)
            .count()
    }

    /// Get all diagnostics
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Consume the handler, returning what it collected
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics.into_inner()
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::FileId;

    fn diagnostic(level: Level, message: &str) -> Diagnostic {
        DiagnosticBuilder::new(level, message).build()
    }

    #[test]
    fn test_level_display() {
        assert_eq!(format!("{}", Level::Error), "error");
        assert_eq!(format!("{}", Level::Warning), "warning");
        assert_eq!(format!("{}", Level::Note), "note");
        assert_eq!(format!("{}", Level::Help), "help");
    }

    #[test]
    fn test_handler_new() {
        let handler = Handler::new();
        assert!(!handler.has_errors());
        assert_eq!(handler.error_count(), 0);
    }

    #[test]
    fn test_handler_counts_errors_only() {
        let handler = Handler::new();
        handler.emit_diagnostic(diagnostic(Level::Error, "e"));
        handler.emit_diagnostic(diagnostic(Level::Warning, "w"));
        assert!(handler.has_errors());
        assert_eq!(handler.error_count(), 1);
        assert_eq!(handler.diagnostics().len(), 2);
    }

    #[test]
    fn test_handler_into_diagnostics() {
        let handler = Handler::new();
        handler.emit_diagnostic(diagnostic(Level::Warning, "w"));
        let diags = handler.into_diagnostics();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].message, "w");
    }

    #[test]
    fn test_render_with_code_and_help() {
        let mut sources = SourceMap::new();
        let id = sources.add_file("demo.pcs", "a = 1;\nb = \"open\n");
        let diag = DiagnosticBuilder::error("unterminated string literal")
            .code(E_LEXER_UNTERMINATED_STRING)
            .span(Span::new(11, 17, 2, 5).with_file_id(id))
            .help("add a closing `\"`")
            .build();

        let rendered = diag.render(&sources);
        let expected = "error[E0101]: unterminated string literal\n\
                        \x20 --> demo.pcs:2:5\n\
                        \x20 |\n\
                        2 | b = \"open\n\
                        \x20 |     ^^^^^\n\
                        \x20 = help: add a closing `\"`\n";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_render_unknown_file() {
        let sources = SourceMap::new();
        let diag = DiagnosticBuilder::new(Level::Warning, "odd")
            .span(Span::new(0, 1, 1, 1).with_file_id(FileId(3)))
            .build();
        assert_eq!(diag.render(&sources), "warning: odd\n");
    }
}
