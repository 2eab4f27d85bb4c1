use crate::error::{Result, ShelfError};
use crate::model::{Book, BookStatus};
use crate::store::SnapshotStore;

/// How the persisted snapshot was (or was not) picked up at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Snapshot existed and parsed; holds the number of books loaded.
    Loaded(usize),
    /// No snapshot file yet; the library starts empty.
    NoFile,
    /// Snapshot existed but could not be read or parsed; the library
    /// starts empty rather than aborting.
    Malformed(String),
}

/// The authoritative in-memory collection of books plus the id allocator.
///
/// Every mutation is immediately followed by a full snapshot write. The
/// write is not atomic with the mutation: on a save error the in-memory
/// change is kept and the error is returned, leaving memory and disk out
/// of sync until the next successful save.
pub struct Library<S: SnapshotStore> {
    store: S,
    books: Vec<Book>,
    next_id: u64,
}

impl<S: SnapshotStore> Library<S> {
    /// Open the library, loading the persisted snapshot if one exists.
    /// Never fails: a missing or malformed snapshot yields an empty
    /// library and the outcome says which it was.
    pub fn open(store: S) -> (Self, LoadOutcome) {
        let (books, outcome) = match store.load_snapshot() {
            Ok(Some(books)) => {
                let count = books.len();
                (books, LoadOutcome::Loaded(count))
            }
            Ok(None) => (Vec::new(), LoadOutcome::NoFile),
            Err(e) => (Vec::new(), LoadOutcome::Malformed(e.to_string())),
        };

        // Ids are never reused, even across restarts: the allocator
        // starts strictly above every id seen in the snapshot.
        let mut next_id = 1;
        for book in &books {
            next_id = next_id.max(book.id + 1);
        }

        (
            Self {
                store,
                books,
                next_id,
            },
            outcome,
        )
    }

    /// Add a book with an auto-assigned id and default status. Title,
    /// author, and year are stored as given, empty or not.
    pub fn add(&mut self, title: String, author: String, year: String) -> Result<Book> {
        let book = Book::new(self.next_id, title, author, year);
        self.next_id += 1;
        self.books.push(book.clone());
        self.persist()?;
        Ok(book)
    }

    /// Remove the book with the given id. No write happens when the id
    /// is unknown.
    pub fn delete(&mut self, id: u64) -> Result<Book> {
        let pos = self
            .books
            .iter()
            .position(|b| b.id == id)
            .ok_or(ShelfError::BookNotFound(id))?;
        let removed = self.books.remove(pos);
        self.persist()?;
        Ok(removed)
    }

    /// Set the status of the book with the given id. The write happens
    /// even when the new status equals the current one.
    pub fn update_status(&mut self, id: u64, status: BookStatus) -> Result<Book> {
        let book = self
            .books
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(ShelfError::BookNotFound(id))?;
        book.status = status;
        let updated = book.clone();
        self.persist()?;
        Ok(updated)
    }

    /// Books whose title or author contains the query (case-insensitive),
    /// or whose year equals it exactly, in store order.
    pub fn search(&self, query: &str) -> Vec<Book> {
        let query_lower = query.to_lowercase();
        self.books
            .iter()
            .filter(|b| {
                b.title.to_lowercase().contains(&query_lower)
                    || b.author.to_lowercase().contains(&query_lower)
                    || b.year == query
            })
            .cloned()
            .collect()
    }

    /// All books in insertion order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn persist(&mut self) -> Result<()> {
        self.store.save_snapshot(&self.books)
    }
}
