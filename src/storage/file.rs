//! Flat-file board store.
//!
//! The board lives in one pretty-printed JSON file. Writes overwrite the file
//! in place; there is no locking and no version check.

use std::fs;
use std::path::{Path, PathBuf};

use super::{BoardStore, strip_bom};
use crate::Result;
use crate::models::Board;

/// Board store backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store for the given backing file. Nothing is touched on disk
    /// until the first `init`, `load` or `save`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the path to the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_board(&self, board: &Board) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(board)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}

impl BoardStore for FileStore {
    fn init(&self) -> Result<bool> {
        if self.path.exists() {
            return Ok(false);
        }

        self.write_board(&Board::new_default()?)?;
        tracing::info!(path = %self.path.display(), "created default board");
        Ok(true)
    }

    fn load(&self) -> Result<Board> {
        self.init()?;
        let raw = fs::read_to_string(&self.path)?;
        let board = serde_json::from_str(strip_bom(&raw))?;
        Ok(board)
    }

    fn save(&self, board: &Board) -> Result<()> {
        self.write_board(board)
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn backend_type(&self) -> &'static str {
        "file"
    }
}
