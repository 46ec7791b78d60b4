//! CLI argument definitions using clap.
//!
//! This module defines the command-line interface structure for all elg
//! commands. It uses clap's derive API for declarative argument parsing.
//!
//! ## Commands
//!
//! - `check`: Audit locale files against the reference locale
//! - `deploy`: Audit, then copy `dist` output into the deployment directory
//! - `clean`: Delete the local `dist` build directory
//! - `init`: Initialize elg configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

/// Common arguments shared by the audit-driven commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Reference locale (overrides config file)
    #[arg(long)]
    pub reference_locale: Option<String>,

    /// Locale files directory (overrides config file)
    #[arg(long)]
    pub languages_root: Option<PathBuf>,

    /// Defaults JSON file path (overrides config file)
    #[arg(long)]
    pub defaults_file: Option<PathBuf>,
}

#[derive(Debug, Parser)]
pub struct CheckArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub args: CheckArgs,
}

#[derive(Debug, Parser)]
pub struct DeployArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Build output directory to deploy from (overrides config file)
    #[arg(long)]
    pub dist_root: Option<PathBuf>,

    /// Deployment directory (overrides config file)
    #[arg(long, env = "DESTINATION_PATH")]
    pub destination: Option<PathBuf>,

    /// Answer yes to every confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// List every stale artifact removed from the destination
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct DeployCommand {
    #[command(flatten)]
    pub args: DeployArgs,
}

#[derive(Debug, Parser)]
pub struct CleanArgs {
    /// Build output directory to delete (overrides config file)
    #[arg(long)]
    pub dist_root: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct CleanCommand {
    #[command(flatten)]
    pub args: CleanArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Audit locale files for missing or extra keys against the reference locale
    Check(CheckCommand),
    /// Audit locale files, then copy dist output into the deployment directory
    Deploy(DeployCommand),
    /// Delete the local dist build directory
    Clean(CleanCommand),
    /// Initialize a new .elgrc.json configuration file
    Init,
}
