pub mod engine;
pub mod intent;
pub mod sql;

pub use engine::{Answer, QueryEngine};
pub use intent::{IntentParser, QueryIntent, EXAMPLE_QUERIES};
pub use sql::SqlQuery;
