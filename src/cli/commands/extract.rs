use anyhow::Result;

use super::super::args::ExtractCommand;
use super::super::exit_status::ExitStatus;
use super::super::report::print_extraction;
use crate::migrate::Migrator;

/// Dry run: print the extracted JSON without touching any file.
pub fn extract(cmd: ExtractCommand) -> Result<ExitStatus> {
    let preview = Migrator::default().preview(&cmd.source)?;

    if preview.extraction.is_empty() {
        eprintln!("No extractable data found in {}", cmd.source.display());
    }
    print_extraction(&preview.extraction)?;

    Ok(ExitStatus::Success)
}
