//! Persistence for the board document.
//!
//! Backends:
//! - `FileStore` - one pretty-printed JSON file (default)
//! - `MemoryStore` - process memory, used by tests
//!
//! The HTTP layer only sees `Arc<dyn BoardStore>`.

mod backend;
mod file;
mod memory;

pub use backend::BoardStore;
pub use file::FileStore;
pub use memory::MemoryStore;

/// Strip a leading UTF-8 byte-order mark, if present.
pub fn strip_bom(raw: &str) -> &str {
    raw.strip_prefix('\u{feff}').unwrap_or(raw)
}
