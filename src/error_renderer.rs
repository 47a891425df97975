//! Error rendering using ariadne
//!
//! Diagnostics that know their location are drawn over a snippet of the
//! source; the rest (runtime failures) are printed as a single report line
//! plus their help notes.

use crate::{Diagnostic, Error, Severity};
use ariadne::{ColorGenerator, Label, Report, ReportKind, Source};
use std::io::Write;

const SOURCE_ID: &str = "<input>";

/// Render an error with formatting to stderr
///
/// # Example
/// ```no_run
/// use kallipolis::{Interpreter, render_error};
///
/// let mut kal = Interpreter::new();
/// let source = "1 + missing";
/// if let Err(e) = kal.evaluate(source) {
///     render_error(&e, source);
/// }
/// ```
pub fn render_error(error: &Error, source: &str) {
    render_error_to_writer(error, source, &mut std::io::stderr(), true).ok();
}

/// Render an error to a specific writer
pub fn render_error_to(error: &Error, source: &str, writer: &mut dyn Write) -> std::io::Result<()> {
    render_error_to_writer(error, source, writer, true)
}

/// Render an error to a String (useful for logs, UIs, etc.)
pub fn render_error_to_string(error: &Error, source: &str) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, source, &mut buf, true).ok();
    String::from_utf8_lossy(&buf).to_string()
}

/// Render an error to a String without color codes (useful for tests)
pub fn render_error_to_string_no_color(error: &Error, source: &str) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, source, &mut buf, false).ok();
    String::from_utf8_lossy(&buf).to_string()
}

fn render_error_to_writer(
    error: &Error,
    source: &str,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    render_diagnostic(source, &error.to_diagnostic(), writer, use_color)
}

fn render_diagnostic(
    source: &str,
    diag: &Diagnostic,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    let Some(span) = &diag.span else {
        match &diag.code {
            Some(code) => writeln!(writer, "{}[{}]: {}", diag.severity, code, diag.message)?,
            None => writeln!(writer, "{}: {}", diag.severity, diag.message)?,
        }
        for help_msg in &diag.help {
            writeln!(writer, "  help: {}", help_msg)?;
        }
        return Ok(());
    };

    let mut colors = ColorGenerator::new();
    colors.next(); // Skip the first color.

    let kind = match diag.severity {
        Severity::Error => ReportKind::Error,
        Severity::Warning => ReportKind::Warning,
        Severity::Info => ReportKind::Advice,
    };

    let mut report = Report::build(kind, (SOURCE_ID, span.0.clone()))
        .with_message(&diag.message)
        .with_config(ariadne::Config::default().with_color(use_color));

    if let Some(code) = &diag.code {
        report = report.with_code(code);
    }

    let color = colors.next();
    report = report.with_label(
        Label::new((SOURCE_ID, span.0.clone()))
            .with_message(&diag.message)
            .with_color(color),
    );

    for help_msg in &diag.help {
        report = report.with_help(help_msg);
    }

    report
        .finish()
        .write((SOURCE_ID, Source::from(source)), &mut *writer)
}
