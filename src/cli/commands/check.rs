use std::path::Path;

use anyhow::Result;

use super::super::args::CheckCommand;
use super::super::exit_status::ExitStatus;
use super::super::report;
use super::helper::resolve_audit_paths;
use crate::config::load_config;
use crate::core::audit::audit_languages;

/// Audit-only command with linter semantics: exit 1 on any missing or
/// additional keys, no confirmation gate.
pub fn check(cmd: CheckCommand) -> Result<ExitStatus> {
    let config = load_config(Path::new("."))?.config;
    let paths = resolve_audit_paths(&config, &cmd.args.common);

    let audit = audit_languages(
        &paths.languages_root,
        &paths.defaults_file,
        &paths.reference_locale,
    )?;

    report::print_audit(&audit);
    report::print_audit_warnings(&audit);

    if audit.is_clean() {
        Ok(ExitStatus::Success)
    } else {
        Ok(ExitStatus::Failure)
    }
}
