use std::process::ExitCode;

use clap::Parser;
use glot_migrate::cli::{Arguments, ExitStatus};

fn main() -> ExitCode {
    let args = Arguments::parse();
    glot_migrate::logging::init(args.verbose());

    match glot_migrate::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}
