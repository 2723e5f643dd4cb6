//! Command-line interface.
//!
//! Thin layer over `migrate::Migrator`: parses arguments, resolves
//! configuration and prints results. Printing lives in `report` so the
//! library can be used without it.

use anyhow::Result;

pub mod args;
mod commands;
mod exit_status;
pub mod report;
mod run;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    run::run(args)
}
