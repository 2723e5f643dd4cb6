use anyhow::Result;

use super::super::args::MigrateCommand;
use super::super::exit_status::ExitStatus;
use super::super::report::print_migration;
use super::helper::resolve_config;
use crate::migrate::Migrator;

pub fn migrate(cmd: MigrateCommand) -> Result<ExitStatus> {
    let config = resolve_config(&cmd.config)?;
    let report = Migrator::new(config).migrate(&cmd.source, &cmd.target)?;
    print_migration(&report);

    Ok(ExitStatus::Success)
}
