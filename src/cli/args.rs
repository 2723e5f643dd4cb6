//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `migrate`: Move a file's translation text into a catalog
//! - `extract`: Print what `migrate` would extract, without writing
//! - `init`: Initialize a `.glot-migrate.json` configuration file
//! - `serve`: Start MCP server for AI integration

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::config::Config;

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

    /// Get the verbose flag from the command's args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Migrate(cmd)) => cmd.config.verbose,
            Some(Command::Extract(cmd)) => cmd.verbose,
            Some(Command::Serve(cmd)) => cmd.config.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Options that override `.glot-migrate.json`.
#[derive(Debug, Clone, Default, Args)]
pub struct ConfigArgs {
    /// Keep the source file unchanged after migrating
    #[arg(long, env = "GLOT_MIGRATE_NO_REPLACE")]
    pub no_replace: bool,

    /// Text appended to the migration marker written into the source file
    #[arg(long, env = "GLOT_MIGRATE_WARNING_SUFFIX")]
    pub warning_suffix: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl ConfigArgs {
    /// Apply command-line and environment overrides on top of a loaded config.
    pub fn apply(&self, mut config: Config) -> Config {
        if self.no_replace {
            config.replace_source = false;
        }
        if let Some(suffix) = &self.warning_suffix {
            config.warning_suffix = suffix.clone();
        }
        config
    }
}

#[derive(Debug, Args)]
pub struct MigrateCommand {
    /// Source file to extract text from (.js, .jsx, .ts, .tsx)
    pub source: PathBuf,

    /// JSON catalog to merge the extracted text into
    pub target: PathBuf,

    #[command(flatten)]
    pub config: ConfigArgs,
}

#[derive(Debug, Args)]
pub struct ExtractCommand {
    /// Source file to extract text from (.js, .jsx, .ts, .tsx)
    pub source: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ServeCommand {
    #[command(flatten)]
    pub config: ConfigArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Move a file's translation text into a JSON catalog
    Migrate(MigrateCommand),
    /// Print the data `migrate` would extract, without writing any file
    Extract(ExtractCommand),
    /// Initialize a new .glot-migrate.json configuration file
    Init,
    /// Start MCP server for AI coding agents
    Serve(ServeCommand),
}
