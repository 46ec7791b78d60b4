use std::path::{Path, PathBuf};

use anyhow::Result;

use super::super::args::DeployCommand;
use super::super::confirm::console_confirm;
use super::super::exit_status::ExitStatus;
use super::super::report;
use super::helper::{resolve_audit_paths, resolve_destination};
use crate::config::load_config;
use crate::core::audit::{AuditReport, audit_languages};
use crate::core::sync::Synchronizer;

/// The full release flow: audit, confirmation gate, then synchronization.
///
/// Refusing the gate exits with status 1 and performs no deployment.
pub fn deploy(cmd: DeployCommand) -> Result<ExitStatus> {
    let args = cmd.args;
    let config = load_config(Path::new("."))?.config;

    let paths = resolve_audit_paths(&config, &args.common);
    let audit = audit_languages(
        &paths.languages_root,
        &paths.defaults_file,
        &paths.reference_locale,
    )?;

    report::print_audit(&audit);
    report::print_audit_warnings(&audit);

    let mut console = console_confirm;
    let mut always = |_: &str| true;
    let gate: &mut dyn FnMut(&str) -> bool = if args.yes { &mut always } else { &mut console };

    if !should_proceed(&audit, gate) {
        report::print_aborted();
        return Ok(ExitStatus::Failure);
    }

    let destination = resolve_destination(&config, args.destination)?;
    let dist_root = args
        .dist_root
        .unwrap_or_else(|| PathBuf::from(&config.dist_root));

    let synchronizer = Synchronizer::new(
        dist_root,
        destination,
        config.marker.clone(),
        &config.stale_patterns,
        args.verbose,
    )?;
    let summary = synchronizer.sync()?;

    report::print_sync_summary(&summary);

    Ok(ExitStatus::Success)
}

/// Apply the halting policy to an audit result.
///
/// Missing keys gate first; when nothing is missing, additional keys gate.
/// A clean audit proceeds unconditionally without consulting the gate.
fn should_proceed(audit: &AuditReport, gate: &mut dyn FnMut(&str) -> bool) -> bool {
    const PROMPT: &str = "Continue anyway? (y/n):";

    if audit.any_missing() {
        report::print_missing_warning();
    } else if audit.any_extra() {
        report::print_extra_warning();
    } else {
        return true;
    }

    if gate(PROMPT) {
        report::print_override();
        true
    } else {
        false
    }
}
