use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShelfError};
use crate::library::Library;
use crate::store::SnapshotStore;

pub fn run<S: SnapshotStore>(library: &mut Library<S>, id: u64) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match library.delete(id) {
        Ok(book) => {
            result.add_message(CmdMessage::success(format!(
                "Book with id {} deleted: {}",
                id, book.title
            )));
            result.books.push(book);
        }
        Err(ShelfError::BookNotFound(_)) => {
            result.add_message(CmdMessage::warning(format!("No book with id {}", id)));
        }
        Err(e) => return Err(e),
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, MessageLevel};
    use crate::store::memory::InMemoryStore;

    #[test]
    fn deletes_existing_book() {
        let (mut lib, _) = Library::open(InMemoryStore::new());
        add::run(&mut lib, "Dune".into(), "Herbert".into(), "1965".into()).unwrap();

        let result = run(&mut lib, 1).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert!(lib.books().is_empty());
    }

    #[test]
    fn unknown_id_is_a_warning_not_an_error() {
        let (mut lib, _) = Library::open(InMemoryStore::new());
        add::run(&mut lib, "Dune".into(), "Herbert".into(), "1965".into()).unwrap();
        let saves_before = lib.store().save_count();

        let result = run(&mut lib, 42).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert_eq!(lib.books().len(), 1);
        assert_eq!(lib.store().save_count(), saves_before);
    }
}
