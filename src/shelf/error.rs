use thiserror::Error;

pub type Result<T> = std::result::Result<T, ShelfError>;

#[derive(Debug, Error)]
pub enum ShelfError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("No book with id {0}")]
    BookNotFound(u64),

    #[error("Invalid status '{0}' (expected 'in stock' or 'checked out')")]
    InvalidStatus(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("{0}")]
    Api(String),
}
