use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::library::Library;
use crate::store::SnapshotStore;

pub fn run<S: SnapshotStore>(
    library: &mut Library<S>,
    title: String,
    author: String,
    year: String,
) -> Result<CmdResult> {
    let book = library.add(title, author, year)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Book added: {}", book)));
    result.books.push(book);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::model::BookStatus;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn adds_book_and_reports_it() {
        let (mut lib, _) = Library::open(InMemoryStore::new());
        let result = run(&mut lib, "Dune".into(), "Herbert".into(), "1965".into()).unwrap();

        assert_eq!(result.books.len(), 1);
        assert_eq!(result.books[0].id, 1);
        assert_eq!(result.books[0].status, BookStatus::InStock);
        assert_eq!(result.messages[0].level, MessageLevel::Success);
    }

    #[test]
    fn every_add_persists_the_snapshot() {
        let (mut lib, _) = Library::open(InMemoryStore::new());
        run(&mut lib, "A".into(), "B".into(), "1".into()).unwrap();
        run(&mut lib, "C".into(), "D".into(), "2".into()).unwrap();
        assert_eq!(lib.store().save_count(), 2);

        let snapshot = lib.store().load_snapshot().unwrap().unwrap();
        assert_eq!(snapshot.len(), 2);
    }
}
