//! In-memory board store, for tests and embedding.

use std::sync::Mutex;

use super::BoardStore;
use crate::models::Board;
use crate::{Error, Result};

/// Board store that keeps the document in process memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    board: Mutex<Option<Board>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `board`.
    pub fn with_board(board: Board) -> Self {
        Self {
            board: Mutex::new(Some(board)),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Option<Board>>> {
        self.board
            .lock()
            .map_err(|_| Error::Other("memory store lock poisoned".to_string()))
    }
}

impl BoardStore for MemoryStore {
    fn init(&self) -> Result<bool> {
        let mut board = self.lock()?;
        if board.is_some() {
            return Ok(false);
        }
        *board = Some(Board::new_default()?);
        Ok(true)
    }

    fn load(&self) -> Result<Board> {
        let mut board = self.lock()?;
        if let Some(existing) = board.as_ref() {
            return Ok(existing.clone());
        }
        let fresh = Board::new_default()?;
        *board = Some(fresh.clone());
        Ok(fresh)
    }

    fn save(&self, board: &Board) -> Result<()> {
        *self.lock()? = Some(board.clone());
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }

    fn backend_type(&self) -> &'static str {
        "memory"
    }
}
