//! jsonboard CLI - serve a single JSON task board over HTTP.

use clap::Parser;
use jsonboard::cli::{Cli, Commands};
use jsonboard::config::ServerConfig;
use jsonboard::storage::{BoardStore, FileStore};
use jsonboard::{Error, logging};
use std::process;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.log_json);

    if let Err(e) = run(&cli) {
        eprintln!("{}", serde_json::json!({ "error": e.to_string() }));
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Error> {
    let config = ServerConfig::from_cli(cli)?;

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => run_server(&config),
        Commands::Init => {
            let store = FileStore::new(&config.data_file);
            let created = store.init()?;
            println!(
                "{}",
                serde_json::json!({
                    "data_file": store.location(),
                    "created": created,
                })
            );
            Ok(())
        }
        Commands::Show => {
            let board = FileStore::new(&config.data_file).load()?;
            println!("{}", serde_json::to_string_pretty(&board)?);
            Ok(())
        }
    }
}

/// Run the board server on a multi-threaded runtime until Ctrl-C.
fn run_server(config: &ServerConfig) -> Result<(), Error> {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| Error::Other(format!("Failed to create runtime: {}", e)))?
        .block_on(jsonboard::server::start_server(config))
}
