//! Output line formatting
//!
//! Standard output carries only what the launcher displays: a payload, an
//! `Error: ` line or a summary. Diagnostics for everything else go to
//! standard error and may be coloured.

use colored::*;

/// User-facing failure line printed on standard output.
pub fn format_error_line(reason: &impl std::fmt::Display) -> String {
    format!("Error: {}", reason)
}

/// Diagnostic printed on standard error for failures outside the
/// stdout contract (configuration, clipboard).
pub fn format_diagnostic(message: &impl std::fmt::Display) -> String {
    format!("{} {}", "error:".red().bold(), message)
}
