use anyhow::Result;

use super::args::{Arguments, Command};
use super::commands::{check::check, clean::clean, deploy::deploy, init::init};
use super::exit_status::ExitStatus;

/// Dispatch to the appropriate command handler based on the parsed arguments.
pub fn run(Arguments { command }: Arguments) -> Result<ExitStatus> {
    match command {
        Some(Command::Check(cmd)) => check(cmd),
        Some(Command::Deploy(cmd)) => deploy(cmd),
        Some(Command::Clean(cmd)) => clean(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
