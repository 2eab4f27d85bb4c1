use crate::error::ShelfError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const STATUS_IN_STOCK: &str = "in stock";
pub const STATUS_CHECKED_OUT: &str = "checked out";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookStatus {
    #[serde(rename = "in stock")]
    InStock,
    #[serde(rename = "checked out")]
    CheckedOut,
}

impl fmt::Display for BookStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookStatus::InStock => write!(f, "{}", STATUS_IN_STOCK),
            BookStatus::CheckedOut => write!(f, "{}", STATUS_CHECKED_OUT),
        }
    }
}

impl FromStr for BookStatus {
    type Err = ShelfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            STATUS_IN_STOCK => Ok(BookStatus::InStock),
            STATUS_CHECKED_OUT => Ok(BookStatus::CheckedOut),
            other => Err(ShelfError::InvalidStatus(other.to_string())),
        }
    }
}

/// One book record. Ids are assigned by the library and never reused;
/// `year` is kept as text so search can compare it literally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: u64,
    pub title: String,
    pub author: String,
    pub year: String,
    pub status: BookStatus,
}

impl Book {
    pub fn new(id: u64, title: String, author: String, year: String) -> Self {
        Self {
            id,
            title,
            author,
            year,
            status: BookStatus::InStock,
        }
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} by {}, {}, Status: {}",
            self.id, self.title, self.author, self.year, self.status
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_known_values() {
        assert_eq!("in stock".parse::<BookStatus>().unwrap(), BookStatus::InStock);
        assert_eq!(
            "checked out".parse::<BookStatus>().unwrap(),
            BookStatus::CheckedOut
        );
    }

    #[test]
    fn status_rejects_unknown_values() {
        let err = "lost".parse::<BookStatus>().unwrap_err();
        assert!(matches!(err, ShelfError::InvalidStatus(s) if s == "lost"));
    }

    #[test]
    fn status_serializes_as_display_label() {
        let json = serde_json::to_string(&BookStatus::CheckedOut).unwrap();
        assert_eq!(json, "\"checked out\"");
    }

    #[test]
    fn new_book_starts_in_stock() {
        let book = Book::new(1, "Dune".into(), "Herbert".into(), "1965".into());
        assert_eq!(book.status, BookStatus::InStock);
        assert_eq!(book.to_string(), "[1] Dune by Herbert, 1965, Status: in stock");
    }
}
