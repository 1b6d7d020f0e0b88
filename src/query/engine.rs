//! Query engine implementation
//!
//! Ties interpretation, SQL execution and formatting together. `answer` is the
//! front end's only entry point and never fails: every problem comes back as
//! a message for the user.

use serde_json::json;
use crate::Result;
use crate::format::OutputFormat;
use crate::storage::{ResultSet, SqliteStore};
use super::intent::{IntentParser, QueryIntent};
use super::sql::SqlQuery;

pub const NOT_UNDERSTOOD: &str =
    "I don't understand that query. Please try one of the example queries shown above.";
pub const NO_RESULTS: &str = "No results found.";

/// The outcome of one sentence
#[derive(Debug, Clone, PartialEq)]
pub enum Answer {
    /// Matching rows
    Rows { intent: QueryIntent, result: ResultSet },
    /// Recognized, but nothing matched
    NoResults { intent: QueryIntent },
    /// No sentence shape matched
    NotUnderstood,
    /// Recognized shape with a malformed argument
    InvalidInput(String),
    /// The database rejected the lookup
    DatabaseError(String),
}

impl Answer {
    pub fn is_success(&self) -> bool {
        matches!(self, Answer::Rows { .. } | Answer::NoResults { .. })
    }

    /// The user-facing message for anything that is not a row listing
    pub fn message(&self) -> Option<String> {
        match self {
            Answer::Rows { .. } => None,
            Answer::NoResults { .. } => Some(NO_RESULTS.to_string()),
            Answer::NotUnderstood => Some(NOT_UNDERSTOOD.to_string()),
            Answer::InvalidInput(detail) => Some(format!("Error processing query: {}", detail)),
            Answer::DatabaseError(detail) => Some(format!("Database error: {}", detail)),
        }
    }

    pub fn render(&self, format: OutputFormat) -> String {
        match (self, format) {
            (Answer::Rows { result, .. }, _) => format.render(result),
            (_, OutputFormat::Json) => {
                let status = if self.is_success() { "ok" } else { "error" };
                format!("{:#}", json!({ "status": status, "message": self.message() }))
            }
            _ => self.message().unwrap_or_default(),
        }
    }
}

/// Answers sentences against a store
pub struct QueryEngine<'a> {
    store: &'a SqliteStore,
    parser: IntentParser,
}

impl<'a> QueryEngine<'a> {
    /// Create a new query engine
    pub fn new(store: &'a SqliteStore) -> Self {
        Self {
            store,
            parser: IntentParser::new(),
        }
    }

    /// Work out what a sentence asks for
    pub fn interpret(&self, sentence: &str) -> Result<QueryIntent> {
        self.parser.parse(sentence)
    }

    /// Run the lookup behind an intent. `Unrecognized` yields an empty result.
    pub fn execute(&self, intent: &QueryIntent) -> Result<ResultSet> {
        match SqlQuery::for_intent(intent) {
            Some(query) => self.store.run(&query),
            None => Ok(ResultSet::default()),
        }
    }

    /// Answer a sentence, turning every failure into a message
    pub fn answer(&self, sentence: &str) -> Answer {
        let intent = match self.interpret(sentence) {
            Ok(intent) => intent,
            Err(e) => {
                tracing::debug!("Rejected input {:?}: {}", sentence, e);
                return Answer::InvalidInput(e.to_string());
            }
        };

        if !intent.is_recognized() {
            tracing::debug!("No pattern matched {:?}", sentence);
            return Answer::NotUnderstood;
        }

        tracing::debug!("Interpreted {:?} as {}", sentence, intent);

        match self.execute(&intent) {
            Ok(result) if result.is_empty() => Answer::NoResults { intent },
            Ok(result) => Answer::Rows { intent, result },
            Err(e) if e.is_storage() => {
                tracing::warn!("Lookup for {} failed: {}", intent, e);
                Answer::DatabaseError(e.to_string())
            }
            Err(e) => Answer::InvalidInput(e.to_string()),
        }
    }
}
