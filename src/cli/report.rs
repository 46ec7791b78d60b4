//! Report formatting and printing utilities.
//!
//! Displays audit results and deployment summaries in a human-readable
//! form. Separate from the engines so elg can be used as a library.

use std::io::{self, Write};

use colored::Colorize;

use crate::core::audit::{AuditReport, LocaleReport};
use crate::core::sync::SyncSummary;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print the audit result to stdout.
pub fn print_audit(report: &AuditReport) {
    print_audit_to(report, &mut io::stdout().lock());
}

/// Print the audit result to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn print_audit_to<W: Write>(report: &AuditReport, writer: &mut W) {
    let _ = writeln!(writer, "Checking languages...");

    for locale in &report.locales {
        print_locale_line(&format!("Language '{}'", locale.locale), locale, writer);
    }

    if let Some(defaults) = &report.defaults {
        print_locale_line("Defaults", defaults, writer);
    }

    if report.is_clean() {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            "Language check complete.".green()
        );
    }
}

fn print_locale_line<W: Write>(subject: &str, report: &LocaleReport, writer: &mut W) {
    if report.is_complete() {
        let _ = writeln!(
            writer,
            "{} {}: all keys present",
            SUCCESS_MARK.green(),
            subject
        );
        return;
    }

    if !report.missing.is_empty() {
        let _ = writeln!(
            writer,
            "{} {}: missing {} {}: {}",
            FAILURE_MARK.red(),
            subject,
            report.missing.len(),
            pluralize(report.missing.len(), "key"),
            report.missing.join(", ").red()
        );
    }

    if !report.extra.is_empty() {
        let _ = writeln!(
            writer,
            "{} {}: {} additional {}: {}",
            FAILURE_MARK.yellow(),
            subject,
            report.extra.len(),
            pluralize(report.extra.len(), "key"),
            report.extra.join(", ").yellow()
        );
    }
}

/// Print per-file audit load warnings to stderr.
pub fn print_audit_warnings(report: &AuditReport) {
    print_audit_warnings_to(report, &mut io::stderr().lock());
}

/// Print per-file audit load warnings to a custom writer.
pub fn print_audit_warnings_to<W: Write>(report: &AuditReport, writer: &mut W) {
    for warning in &report.warnings {
        let _ = writeln!(
            writer,
            "{} skipped '{}': {}",
            "warning:".bold().yellow(),
            warning.file_path,
            warning.error
        );
    }
}

/// Escalation line shown before the missing-keys confirmation gate.
pub fn print_missing_warning() {
    eprintln!(
        "{} {}",
        "warning:".bold().yellow(),
        "missing translation keys, please fix!".red()
    );
}

/// Escalation line shown before the additional-keys confirmation gate.
pub fn print_extra_warning() {
    eprintln!(
        "{} {}",
        "warning:".bold().yellow(),
        "additional translation keys, please fix!".yellow()
    );
}

/// Printed when the operator overrides a failed audit.
pub fn print_override() {
    println!("Continuing anyway...");
}

/// Printed when the operator refuses to continue past a failed audit.
pub fn print_aborted() {
    eprintln!(
        "{} {}",
        "error:".bold().red(),
        "deployment aborted by operator".red()
    );
}

/// Print the deployment summary: warnings to stderr, totals to stdout.
pub fn print_sync_summary(summary: &SyncSummary) {
    print_sync_summary_to(summary, &mut io::stdout().lock(), &mut io::stderr().lock());
}

/// Print the deployment summary to custom writers.
pub fn print_sync_summary_to<O: Write, E: Write>(
    summary: &SyncSummary,
    out: &mut O,
    err: &mut E,
) {
    for warning in &summary.warnings {
        let _ = writeln!(
            err,
            "{} {}: {}",
            "warning:".bold().yellow(),
            warning.file_path,
            warning.error
        );
    }

    if summary.empty_source {
        let _ = writeln!(
            err,
            "{} no files found in the build directory",
            "warning:".bold().yellow()
        );
    }

    let _ = writeln!(
        out,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Deployed {} {} ({} stamped), removed {} stale {}",
            summary.processed,
            pluralize(summary.processed, "file"),
            summary.stamped,
            summary.cleaned,
            pluralize(summary.cleaned, "artifact"),
        )
        .green()
    );
}

fn pluralize(count: usize, noun: &str) -> String {
    if count == 1 {
        noun.to_string()
    } else {
        format!("{}s", noun)
    }
}
