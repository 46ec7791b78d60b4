use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use colored::Colorize;

use super::super::args::CleanCommand;
use super::super::exit_status::ExitStatus;
use super::super::report::SUCCESS_MARK;
use crate::config::load_config;

/// Delete the local build directory ahead of a fresh build.
pub fn clean(cmd: CleanCommand) -> Result<ExitStatus> {
    let config = load_config(Path::new("."))?.config;
    let dist_root = cmd
        .args
        .dist_root
        .unwrap_or_else(|| PathBuf::from(&config.dist_root));

    if !dist_root.exists() {
        println!("'{}' does not exist, skipping clean.", dist_root.display());
        return Ok(ExitStatus::Success);
    }

    println!("Deleting '{}'...", dist_root.display());
    fs::remove_dir_all(&dist_root)
        .with_context(|| format!("Failed to delete '{}'", dist_root.display()))?;

    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Removed '{}'", dist_root.display()).green()
    );

    Ok(ExitStatus::Success)
}
