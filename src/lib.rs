//! # Deskquery - plain-English questions over a company database
//!
//! Deskquery answers a small, fixed set of English sentences about the
//! employees and departments of a company, stored in SQLite.
//!
//! Deskquery provides:
//! - A seeded SQLite store with `Employees` and `Departments` tables
//! - Sentence-pattern interpretation into typed query intents
//! - Parameterized SQL execution for each intent
//! - Result formatting as labelled text, tables or JSON
//! - A line-oriented chat session over any reader/writer pair

pub mod model;
pub mod storage;
pub mod query;
pub mod format;
pub mod config;
pub mod chat;
pub mod ui;

// Re-exports for convenient access
pub use model::{Department, Employee};
pub use query::{Answer, QueryEngine, QueryIntent};
pub use storage::{ResultSet, SqliteStore};
pub use format::OutputFormat;

/// Result type alias for Deskquery operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Deskquery operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Storage(#[from] rusqlite::Error),

    #[error("invalid date '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("unknown output format: {0}")]
    UnknownFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl Error {
    /// Whether the failure came from the database rather than the input
    pub fn is_storage(&self) -> bool {
        matches!(self, Error::Storage(_))
    }
}
