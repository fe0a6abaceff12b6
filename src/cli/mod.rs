//! CLI argument definitions for jsonboard.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{DEFAULT_DATA_FILE, DEFAULT_HOST, DEFAULT_INDEX_FILE, DEFAULT_PORT};

/// jsonboard - a single JSON task board served over HTTP.
///
/// Run with no arguments to serve `index.html` and `board.json` from the
/// current directory.
#[derive(Parser, Debug)]
#[command(name = "jsonboard")]
#[command(author, version, about = "Serve a single JSON task board over HTTP", long_about = None)]
pub struct Cli {
    /// Directory that relative file paths are resolved against.
    /// The path must exist. Defaults to the current directory.
    #[arg(short = 'C', long = "root", global = true, env = "JSONBOARD_ROOT")]
    pub root: Option<PathBuf>,

    /// Port to listen on
    #[arg(short, long, global = true, env = "JSONBOARD_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Host address to bind to (use 0.0.0.0 for network access)
    #[arg(long, global = true, env = "JSONBOARD_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Board data file
    #[arg(long, global = true, env = "JSONBOARD_DATA_FILE", default_value = DEFAULT_DATA_FILE)]
    pub data_file: PathBuf,

    /// Static page served at `/`
    #[arg(long, global = true, env = "JSONBOARD_INDEX_FILE", default_value = DEFAULT_INDEX_FILE)]
    pub index_file: PathBuf,

    /// Emit log lines as JSON
    #[arg(long, global = true, env = "JSONBOARD_LOG_JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Top-level commands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Start the board server (default)
    Serve,

    /// Create the data file with a default board if it does not exist
    Init,

    /// Print the current board as JSON
    Show,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults_without_arguments() {
        let cli = Cli::try_parse_from(["jsonboard"]).unwrap();
        assert_eq!(cli.port, 3210);
        assert_eq!(cli.data_file, PathBuf::from("board.json"));
        assert_eq!(cli.index_file, PathBuf::from("index.html"));
        assert_eq!(cli.command, None);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["jsonboard", "init", "--data-file", "data/b.json"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Init));
        assert_eq!(cli.data_file, PathBuf::from("data/b.json"));
    }

    #[test]
    fn test_invalid_port_rejected() {
        assert!(Cli::try_parse_from(["jsonboard", "--port", "70000"]).is_err());
    }
}
