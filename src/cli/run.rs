use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{extract::extract, helper::resolve_config, init::init, migrate::migrate},
    exit_status::ExitStatus,
};

/// Dispatch a parsed command to its handler.
///
/// # Returns
/// - `Ok(ExitStatus)` once the command has run and printed its output
/// - `Err` if the command fails (unreadable source, parse error, write error, ...)
pub fn run(Arguments { command }: Arguments) -> Result<ExitStatus> {
    match command {
        Some(Command::Migrate(cmd)) => migrate(cmd),
        Some(Command::Extract(cmd)) => extract(cmd),
        Some(Command::Init) => init(),
        Some(Command::Serve(cmd)) => {
            let config = resolve_config(&cmd.config)?;
            crate::mcp::run_server(config)?;
            Ok(ExitStatus::Success)
        }
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
