//! # API Facade
//!
//! Thin entry point over the command layer, generic over the storage
//! backend the way the rest of the crate is. It normalizes inputs
//! (status strings become [`BookStatus`]) and dispatches; business logic
//! lives in `commands/*.rs`, presentation in the CLI. Nothing here
//! writes to stdout or exits the process.

use crate::commands::{self, CmdMessage, CmdResult};
use crate::error::Result;
use crate::library::{Library, LoadOutcome};
use crate::model::BookStatus;
use crate::store::SnapshotStore;

pub struct ShelfApi<S: SnapshotStore> {
    library: Library<S>,
    load_outcome: LoadOutcome,
}

impl<S: SnapshotStore> ShelfApi<S> {
    pub fn open(store: S) -> Self {
        let (library, load_outcome) = Library::open(store);
        Self {
            library,
            load_outcome,
        }
    }

    /// What happened to the persisted snapshot at startup, as a
    /// printable message. `None` for the quiet success case.
    pub fn load_report(&self) -> Option<CmdMessage> {
        match &self.load_outcome {
            LoadOutcome::Loaded(_) => None,
            LoadOutcome::NoFile => Some(CmdMessage::info(
                "No data file found, starting with an empty library.",
            )),
            LoadOutcome::Malformed(reason) => Some(CmdMessage::warning(format!(
                "Could not load data file ({}), starting with an empty library.",
                reason
            ))),
        }
    }

    pub fn load_outcome(&self) -> &LoadOutcome {
        &self.load_outcome
    }

    pub fn add_book(&mut self, title: String, author: String, year: String) -> Result<CmdResult> {
        commands::add::run(&mut self.library, title, author, year)
    }

    pub fn delete_book(&mut self, id: u64) -> Result<CmdResult> {
        commands::delete::run(&mut self.library, id)
    }

    pub fn search_books(&self, term: &str) -> Result<CmdResult> {
        commands::search::run(&self.library, term)
    }

    pub fn list_books(&self) -> Result<CmdResult> {
        commands::list::run(&self.library)
    }

    /// Validates the status string before anything touches the store:
    /// an unrecognized status is reported and nothing is written.
    pub fn update_status(&mut self, id: u64, status: &str) -> Result<CmdResult> {
        let status: BookStatus = match status.parse() {
            Ok(s) => s,
            Err(e) => {
                let mut result = CmdResult::default();
                result.add_message(CmdMessage::error(e.to_string()));
                return Ok(result);
            }
        };
        commands::status::run(&mut self.library, id, status)
    }
}
