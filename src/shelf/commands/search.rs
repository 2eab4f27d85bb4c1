use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::library::Library;
use crate::store::SnapshotStore;

pub fn run<S: SnapshotStore>(library: &Library<S>, term: &str) -> Result<CmdResult> {
    let matches = library.search(term);
    let mut result = CmdResult::default().with_books(matches);
    if result.books.is_empty() {
        result.add_message(CmdMessage::info(format!("No books matching '{}'.", term)));
    }
    Ok(result)
}
