//! Command-line arguments for `pmo`.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for view commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Text,
    /// JSON for the render layer
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "pmo")]
#[command(version)]
#[command(about = "PMO dashboard: resource load, risk matrix and calendar views", long_about = None)]
pub struct Cli {
    /// Log level (trace|debug|info|warn|error); defaults by build mode
    #[arg(long = "log-level", global = true)]
    pub log_level: Option<String>,

    /// Absolute directory for rolling log files; logging is off when omitted
    #[arg(long = "log-dir", global = true, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Open the database and apply pending migrations
    Migrate {
        #[arg(long, value_name = "PATH")]
        db: PathBuf,
    },
    /// Replace stored state with a JSON snapshot
    Import {
        #[arg(long, value_name = "PATH")]
        db: PathBuf,
        #[arg(long, value_name = "FILE")]
        snapshot: PathBuf,
    },
    /// Show per-resource allocation load
    Loads {
        #[arg(long, value_name = "PATH")]
        db: PathBuf,
        #[arg(long = "format", value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Show the 5x5 risk matrix
    Risks {
        #[arg(long, value_name = "PATH")]
        db: PathBuf,
        #[arg(long = "format", value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Show project events overlapping [from, to) epoch milliseconds
    Calendar {
        #[arg(long, value_name = "PATH")]
        db: PathBuf,
        #[arg(long, value_name = "MS")]
        from: i64,
        #[arg(long, value_name = "MS")]
        to: i64,
        #[arg(long = "format", value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command, OutputFormat};
    use clap::{CommandFactory, Parser};

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_loads_with_global_flags() {
        let cli = Cli::parse_from([
            "pmo", "loads", "--db", "/tmp/pmo.db", "--format", "json", "--log-level", "warn",
        ]);
        assert_eq!(cli.log_level.as_deref(), Some("warn"));
        match cli.command {
            Command::Loads { db, format } => {
                assert_eq!(db.to_str(), Some("/tmp/pmo.db"));
                assert_eq!(format, OutputFormat::Json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
