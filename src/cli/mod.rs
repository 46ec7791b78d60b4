use anyhow::Result;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

mod args;
pub mod commands;
pub mod confirm;
mod exit_status;
pub mod report;
mod run;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    run::run(args)
}
