//! jsonboard - a single-document task board served over HTTP.
//!
//! This library provides the pieces behind the `jsonboard` binary: the board
//! document model, the store that persists it, and the axum server that
//! exposes it.

pub mod cli;
pub mod config;
pub mod logging;
pub mod models;
pub mod server;
pub mod storage;

/// Library-level error type for jsonboard operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The request body was not JSON text.
    #[error("Invalid JSON body")]
    InvalidJsonBody,

    /// The request body was JSON but not shaped like a board.
    #[error("Invalid board format")]
    InvalidBoardFormat,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for jsonboard operations.
pub type Result<T> = std::result::Result<T, Error>;
