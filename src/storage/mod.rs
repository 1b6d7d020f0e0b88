//! Storage Layer - SQLite-backed persistence
//!
//! System of record is SQLite with tables:
//! - Employees(ID, Name, Department, Salary, Hire_Date)
//! - Departments(ID, Name, Manager)
//!
//! Both tables are seeded on first open and read-only afterwards.

pub mod schema;
pub mod seed;
pub mod sqlite;

pub use sqlite::{Cell, DbStats, ResultSet, SqliteStore};
