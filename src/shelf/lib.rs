//! # Shelf Architecture
//!
//! Shelf is a **UI-agnostic book library**. The CLI (including its
//! interactive menu) is a thin client over a library crate; the same
//! core could serve any other front end.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                              │
//! │  - Parses arguments, runs the menu loop, formats output     │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (status strings → BookStatus)          │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic, returns CmdResult                   │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Record Store (library.rs) + Storage (store/)               │
//! │  - Library owns the books and the id allocator              │
//! │  - SnapshotStore trait: JsonFileStore / InMemoryStore       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Persistence model
//!
//! Every mutation rewrites the full JSON snapshot before returning.
//! Loading is fail-open: a missing or malformed snapshot starts the
//! library empty and reports it, never aborts.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`library`]: The in-memory record store and id allocator
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Book`, `BookStatus`)
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod library;
pub mod model;
pub mod store;
