use super::SnapshotStore;
use crate::error::{Result, ShelfError};
use crate::model::Book;

/// In-memory store for tests. Tracks how many saves happened and can be
/// switched to fail, to exercise persistence-failure paths.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    snapshot: Option<Vec<Book>>,
    save_count: usize,
    fail_saves: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(books: Vec<Book>) -> Self {
        Self {
            snapshot: Some(books),
            ..Self::default()
        }
    }

    pub fn save_count(&self) -> usize {
        self.save_count
    }

    pub fn set_fail_saves(&mut self, fail: bool) {
        self.fail_saves = fail;
    }
}

impl SnapshotStore for InMemoryStore {
    fn save_snapshot(&mut self, books: &[Book]) -> Result<()> {
        if self.fail_saves {
            return Err(ShelfError::Store("simulated save failure".to_string()));
        }
        self.snapshot = Some(books.to_vec());
        self.save_count += 1;
        Ok(())
    }

    fn load_snapshot(&self) -> Result<Option<Vec<Book>>> {
        Ok(self.snapshot.clone())
    }
}
