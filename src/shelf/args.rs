use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "shelf")]
#[command(about = "Command-line book library manager", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to the library data file (overrides config)
    #[arg(long, global = true)]
    pub data_file: Option<PathBuf>,

    /// Keep the library in the user data dir instead of the current directory
    #[arg(short, long, global = true)]
    pub global: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a book
    #[command(alias = "a")]
    Add {
        title: String,
        author: String,
        /// Publication year (kept as text)
        year: String,
    },

    /// Delete a book by id
    #[command(alias = "rm")]
    Delete {
        /// Id of the book (e.g. 3)
        id: String,
    },

    /// Search by title, author, or exact year
    #[command(alias = "s")]
    Search { term: String },

    /// List all books
    #[command(alias = "ls")]
    List,

    /// Update the status of a book
    Status {
        /// Id of the book (e.g. 3)
        id: String,
        /// New status: "in stock" or "checked out"
        status: String,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., data-file)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
