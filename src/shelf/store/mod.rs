//! # Storage Layer
//!
//! The [`SnapshotStore`] trait abstracts how the library snapshot is
//! persisted. Every mutation rewrites the full snapshot; there is no
//! incremental or append persistence.
//!
//! ## Implementations
//!
//! - [`fs::JsonFileStore`]: production storage, one pretty-printed JSON
//!   file holding the ordered list of books. The file is overwritten in
//!   place; a crash mid-write can truncate it, which the library treats
//!   as a malformed snapshot on the next load (fail-open, starts empty).
//!
//! - [`memory::InMemoryStore`]: in-memory storage for testing. Counts
//!   saves and can be told to fail, so tests can observe that an
//!   operation did (or did not) trigger a write.

use crate::error::Result;
use crate::model::Book;

pub mod fs;
pub mod memory;

/// Abstract interface for snapshot persistence.
///
/// `load_snapshot` distinguishes "no snapshot yet" (`Ok(None)`) from a
/// snapshot that exists but cannot be read or parsed (`Err`).
pub trait SnapshotStore {
    /// Overwrite the persisted snapshot with the given books, in order.
    fn save_snapshot(&mut self, books: &[Book]) -> Result<()>;

    /// Read the persisted snapshot, if one exists.
    fn load_snapshot(&self) -> Result<Option<Vec<Book>>>;
}
