//! SQLite storage backend.
//!
//! Uses `rusqlite` for statements and `tokio-rusqlite` to run them off the
//! async runtime.

mod conversions;
mod error;
mod repository;
mod schema;

pub use repository::SqliteRepository;
