//! Error rendering using ariadne
//!
//! Diagnostics carry byte spans into the evaluated expression, so they can be
//! drawn under the source with labels, codes and help text.

use crate::{Diagnostic, Error, Severity};
use ariadne::{ColorGenerator, Label, Report, ReportKind, Source};
use std::io::Write;

const SOURCE_ID: &str = "<input>";

/// Render an error to stderr
///
/// # Example
/// ```no_run
/// use keypad::{Engine, render_error};
///
/// let engine = Engine::default();
/// if let Err(e) = engine.evaluate("5/0") {
///     render_error(&e);
/// }
/// ```
pub fn render_error(error: &Error) {
    render_error_to_writer(error, &mut std::io::stderr(), true).ok();
}

/// Render an error to a specific writer
pub fn render_error_to(error: &Error, writer: &mut dyn Write) -> std::io::Result<()> {
    render_error_to_writer(error, writer, true)
}

/// Render an error to a String
pub fn render_error_to_string(error: &Error) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, &mut buf, true).ok();
    String::from_utf8_lossy(&buf).to_string()
}

/// Render an error to a String without color codes
///
/// # Example
/// ```
/// use keypad::{Engine, render_error_to_string_no_color};
///
/// let engine = Engine::default();
/// let err = engine.evaluate("(2+3").unwrap_err();
/// let output = render_error_to_string_no_color(&err);
/// assert!(output.contains("Unclosed delimiter"));
/// ```
pub fn render_error_to_string_no_color(error: &Error) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, &mut buf, false).ok();
    String::from_utf8_lossy(&buf).to_string()
}

fn render_error_to_writer(
    error: &Error,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    match error {
        Error::Compilation { diagnostics, src } => {
            render_diagnostics(src, diagnostics, writer, use_color)
        }
        Error::Runtime { diagnostic, src } => {
            render_diagnostics(src, core::slice::from_ref(diagnostic), writer, use_color)
        }
        Error::ResourceExceeded(msg) => {
            writeln!(writer, "Resource limit exceeded: {}", msg)
        }
        Error::Format(err) => {
            writeln!(writer, "Cannot display result: {}", err)
        }
    }
}

fn render_diagnostics(
    src: &str,
    diagnostics: &[Diagnostic],
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    for diag in diagnostics {
        let mut colors = ColorGenerator::new();
        colors.next(); // Skip the first color.

        let kind = match diag.severity {
            Severity::Error => ReportKind::Error,
        };

        let mut report = Report::build(kind, (SOURCE_ID, diag.span.0.clone()))
            .with_message(&diag.message)
            .with_config(ariadne::Config::default().with_color(use_color));

        if let Some(code) = &diag.code {
            report = report.with_code(code);
        }

        let color = colors.next();
        report = report.with_label(
            Label::new((SOURCE_ID, diag.span.0.clone()))
                .with_message(&diag.message)
                .with_color(color),
        );

        for related in &diag.related {
            let color = colors.next();
            report = report.with_label(
                Label::new((SOURCE_ID, related.span.0.clone()))
                    .with_message(&related.message)
                    .with_color(color),
            );
        }

        for help_msg in &diag.help {
            report = report.with_help(help_msg);
        }

        report
            .finish()
            .write((SOURCE_ID, Source::from(src)), &mut *writer)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Engine;

    #[test]
    fn test_render_parse_error() {
        let engine = Engine::default();

        let result = engine.evaluate("2+*3");
        assert!(result.is_err());
        if let Err(e) = result {
            let output = render_error_to_string_no_color(&e);

            assert!(output.contains("Error"));
            assert!(output.contains("P001"));
            assert!(output.contains("2+*3"));
        }
    }

    #[test]
    fn test_render_division_by_zero() {
        let engine = Engine::default();

        let result = engine.evaluate("7/(2-2)");
        assert!(result.is_err());
        if let Err(e) = result {
            let output = render_error_to_string_no_color(&e);

            assert!(output.contains("Division by zero"));
            assert!(output.contains("this evaluates to zero"));
            assert!(output.contains("Change the divisor"));
        }
    }

    #[test]
    fn test_render_resource_error_is_one_line() {
        let error = Error::ResourceExceeded("too deep".to_string());
        assert_eq!(
            render_error_to_string_no_color(&error),
            "Resource limit exceeded: too deep\n"
        );
    }

    #[test]
    fn test_render_to_string_captures_output() {
        let engine = Engine::default();

        let result = engine.evaluate("(1+");
        assert!(result.is_err());
        if let Err(e) = result {
            let output = render_error_to_string_no_color(&e);

            assert!(!output.is_empty());
            assert!(output.lines().count() > 1);
        }
    }
}
