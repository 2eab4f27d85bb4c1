use super::SnapshotStore;
use crate::error::{Result, ShelfError};
use crate::model::Book;
use std::fs;
use std::path::{Path, PathBuf};

pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(ShelfError::Io)?;
            }
        }
        Ok(())
    }
}

impl SnapshotStore for JsonFileStore {
    fn save_snapshot(&mut self, books: &[Book]) -> Result<()> {
        self.ensure_parent_dir()?;
        // serde_json leaves non-ASCII text unescaped, so titles and
        // authors round-trip byte for byte.
        let content = serde_json::to_string_pretty(books).map_err(ShelfError::Serialization)?;
        fs::write(&self.path, content).map_err(ShelfError::Io)?;
        Ok(())
    }

    fn load_snapshot(&self) -> Result<Option<Vec<Book>>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path).map_err(ShelfError::Io)?;
        let books: Vec<Book> =
            serde_json::from_str(&content).map_err(ShelfError::Serialization)?;
        Ok(Some(books))
    }
}
