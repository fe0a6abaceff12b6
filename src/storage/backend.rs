//! Store trait shared by all board backends.

use crate::Result;
use crate::models::Board;

/// Trait for stores that persist the single board document.
///
/// Implementations are shared across request handlers without any outer
/// lock, so concurrent `save` calls race and the last writer wins.
pub trait BoardStore: Send + Sync {
    /// Create the default board if nothing is stored yet.
    ///
    /// Returns `true` when a new board was written.
    fn init(&self) -> Result<bool>;

    /// Read the current board, initializing the store first if needed.
    fn load(&self) -> Result<Board>;

    /// Replace the stored board wholesale.
    fn save(&self, board: &Board) -> Result<()>;

    /// Get the storage location description (for display purposes).
    fn location(&self) -> String;

    /// Get the backend type name.
    fn backend_type(&self) -> &'static str;
}
