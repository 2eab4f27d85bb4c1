use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::library::Library;
use crate::store::SnapshotStore;

pub fn run<S: SnapshotStore>(library: &Library<S>) -> Result<CmdResult> {
    let books = library.books().to_vec();
    let mut result = CmdResult::default().with_books(books);
    if result.books.is_empty() {
        result.add_message(CmdMessage::info("The library is empty."));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, MessageLevel};
    use crate::store::memory::InMemoryStore;

    #[test]
    fn empty_library_reports_rather_than_errors() {
        let (lib, _) = Library::open(InMemoryStore::new());
        let result = run(&lib).unwrap();
        assert!(result.books.is_empty());
        assert_eq!(result.messages[0].level, MessageLevel::Info);
    }

    #[test]
    fn lists_books_in_insertion_order() {
        let (mut lib, _) = Library::open(InMemoryStore::new());
        add::run(&mut lib, "B".into(), "x".into(), "1".into()).unwrap();
        add::run(&mut lib, "A".into(), "y".into(), "2".into()).unwrap();

        let result = run(&lib).unwrap();
        let titles: Vec<&str> = result.books.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["B", "A"]);
        assert!(result.messages.is_empty());
    }
}
