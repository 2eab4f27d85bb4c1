use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShelfError};
use crate::library::Library;
use crate::model::BookStatus;
use crate::store::SnapshotStore;

pub fn run<S: SnapshotStore>(
    library: &mut Library<S>,
    id: u64,
    status: BookStatus,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match library.update_status(id, status) {
        Ok(book) => {
            result.add_message(CmdMessage::success(format!(
                "Status of book {} set to '{}'.",
                id, status
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
