//! Output formatting for CLI responses.
//!
//! Results go to stdout; errors and diagnostics go to stderr.

use serde::Serialize;
use tempo_types::{DiagnosticError, TempoError};

/// Prints a value as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Prints an error message.
pub fn print_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

/// Cause and remediation of an error, empty when neither is known.
pub fn format_diagnostic(e: &dyn DiagnosticError) -> String {
    let mut out = String::new();
    if let Some(hint) = e.hint() {
        out.push_str(&format!("\n  Cause: {hint}\n"));
    }
    if let Some(fix) = e.fix() {
        out.push_str(&format!("  Fix:   {fix}\n"));
    }
    out
}

/// Prints the cause and remediation of an error, when known.
pub fn print_diagnostic(e: &dyn DiagnosticError) {
    let text = format_diagnostic(e);
    if !text.is_empty() {
        eprintln!("{text}");
    }
}

/// Reports a failure on stderr and wraps it as the command's `TempoError`.
pub fn fatal<E>(e: E, context: impl Into<String>) -> anyhow::Error
where
    E: DiagnosticError + Into<TempoError>,
{
    print_diagnostic(&e);
    anyhow::Error::new(e.into().with_context(context))
}
