//! Server configuration.
//!
//! Settings come from CLI flags or their `JSONBOARD_*` environment variables
//! (see [`crate::cli::Cli`]). With nothing set, the server listens on port
//! 3210 and keeps `board.json` and `index.html` in the current directory.

use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::{Error, Result};

/// Default listening port
pub const DEFAULT_PORT: u16 = 3210;

/// Default bind address
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default backing file name
pub const DEFAULT_DATA_FILE: &str = "board.json";

/// Default static page file name
pub const DEFAULT_INDEX_FILE: &str = "index.html";

/// Fully resolved settings for one server run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to listen on
    pub addr: SocketAddr,
    /// Backing file holding the board
    pub data_file: PathBuf,
    /// Static page served at `/`
    pub index_file: PathBuf,
}

impl ServerConfig {
    /// Resolve parsed CLI arguments against the root directory.
    ///
    /// The root is `--root` when given (it must exist), else the current
    /// working directory.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let root = match &cli.root {
            Some(path) => {
                if !path.is_dir() {
                    return Err(Error::InvalidInput(format!(
                        "Root directory does not exist: {}",
                        path.display()
                    )));
                }
                path.clone()
            }
            None => std::env::current_dir()?,
        };

        Self::resolve(&root, &cli.host, cli.port, &cli.data_file, &cli.index_file)
    }

    /// Build a config from explicit values. Relative file paths are joined
    /// onto `root`; absolute ones are kept.
    pub fn resolve(
        root: &Path,
        host: &str,
        port: u16,
        data_file: &Path,
        index_file: &Path,
    ) -> Result<Self> {
        let ip: IpAddr = host
            .parse()
            .map_err(|e| Error::InvalidInput(format!("Invalid host address '{}': {}", host, e)))?;

        Ok(Self {
            addr: SocketAddr::from((ip, port)),
            data_file: root.join(data_file),
            index_file: root.join(index_file),
        })
    }
}
