//! Sentence-pattern interpretation
//!
//! Four fixed sentence shapes are recognized. Each is selected by a trigger
//! phrase and then has exactly one argument pulled out by a regex:
//!
//! | trigger                                         | argument                 |
//! |-------------------------------------------------|--------------------------|
//! | `show me all employees in` / `list all employees in` | `in the (\w+) department` |
//! | `who is the manager of`                          | `of the (\w+) department` |
//! | `list all employees hired after`                 | `hired after (YYYY-MM-DD)` |
//! | `total salary expense for`                       | `for the (\w+) department` |
//!
//! Triggers are tried in that order and the first hit decides the branch;
//! if its regex then fails the sentence is unrecognized.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::{Error, Result};

/// Example sentences shown to the user, one per intent
pub const EXAMPLE_QUERIES: [&str; 4] = [
    "Show me all employees in the Sales department.",
    "Who is the manager of the Engineering department?",
    "List all employees hired after 2021-01-01",
    "What is the total salary expense for the Marketing department?",
];

static IN_DEPARTMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"in the (\w+) department").expect("valid regex"));
static OF_DEPARTMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"of the (\w+) department").expect("valid regex"));
static HIRED_AFTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"hired after (\d{4}-\d{2}-\d{2})").expect("valid regex"));
static FOR_DEPARTMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"for the (\w+) department").expect("valid regex"));

/// What a sentence asks for.
///
/// Department names are kept as typed (lower-cased); lookups compare them
/// case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryIntent {
    /// Everyone whose department matches
    EmployeesInDepartment(String),
    /// The manager recorded for a department
    ManagerOf(String),
    /// Everyone hired strictly after a date
    HiredAfter(NaiveDate),
    /// Sum of salaries in a department
    TotalSalary(String),
    /// No known sentence shape matched
    Unrecognized,
}

impl QueryIntent {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryIntent::EmployeesInDepartment(_) => "employees_in_department",
            QueryIntent::ManagerOf(_) => "manager_of",
            QueryIntent::HiredAfter(_) => "hired_after",
            QueryIntent::TotalSalary(_) => "total_salary",
            QueryIntent::Unrecognized => "unrecognized",
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, QueryIntent::Unrecognized)
    }
}

impl std::fmt::Display for QueryIntent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryIntent::EmployeesInDepartment(d)
            | QueryIntent::ManagerOf(d)
            | QueryIntent::TotalSalary(d) => write!(f, "{}({})", self.as_str(), d),
            QueryIntent::HiredAfter(date) => write!(f, "{}({})", self.as_str(), date),
            QueryIntent::Unrecognized => write!(f, "{}", self.as_str()),
        }
    }
}

/// One sentence shape: trigger phrases plus the argument regex
struct Pattern {
    triggers: &'static [&'static str],
    argument: &'static LazyLock<Regex>,
    build: fn(&str) -> Result<QueryIntent>,
}

static PATTERNS: [Pattern; 4] = [
    Pattern {
        triggers: &["show me all employees in", "list all employees in"],
        argument: &IN_DEPARTMENT,
        build: |dept| Ok(QueryIntent::EmployeesInDepartment(dept.to_string())),
    },
    Pattern {
        triggers: &["who is the manager of"],
        argument: &OF_DEPARTMENT,
        build: |dept| Ok(QueryIntent::ManagerOf(dept.to_string())),
    },
    Pattern {
        triggers: &["list all employees hired after"],
        argument: &HIRED_AFTER,
        build: |raw| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .map(QueryIntent::HiredAfter)
                .map_err(|_| Error::InvalidDate(raw.to_string()))
        },
    },
    Pattern {
        triggers: &["total salary expense for"],
        argument: &FOR_DEPARTMENT,
        build: |dept| Ok(QueryIntent::TotalSalary(dept.to_string())),
    },
];

/// Maps sentences to intents
#[derive(Debug, Default, Clone, Copy)]
pub struct IntentParser;

impl IntentParser {
    pub fn new() -> Self {
        Self
    }

    /// Interpret a sentence.
    ///
    /// Fails only when a recognized shape carries a malformed argument
    /// (a date that is not on the calendar).
    pub fn parse(&self, sentence: &str) -> Result<QueryIntent> {
        let normalized = sentence.trim().to_lowercase();

        let Some(pattern) = PATTERNS
            .iter()
            .find(|p| p.triggers.iter().any(|t| normalized.contains(t)))
        else {
            return Ok(QueryIntent::Unrecognized);
        };

        match pattern.argument.captures(&normalized).and_then(|c| c.get(1)) {
            Some(arg) => (pattern.build)(arg.as_str()),
            None => Ok(QueryIntent::Unrecognized),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> QueryIntent {
        IntentParser::new().parse(s).unwrap()
    }

    #[test]
    fn test_examples_are_recognized() {
        assert_eq!(parse(EXAMPLE_QUERIES[0]), QueryIntent::EmployeesInDepartment("sales".into()));
        assert_eq!(parse(EXAMPLE_QUERIES[1]), QueryIntent::ManagerOf("engineering".into()));
        assert_eq!(
            parse(EXAMPLE_QUERIES[2]),
            QueryIntent::HiredAfter(NaiveDate::from_ymd_opt(2021, 1, 1).unwrap())
        );
        assert_eq!(parse(EXAMPLE_QUERIES[3]), QueryIntent::TotalSalary("marketing".into()));
    }

    #[test]
    fn test_list_variant_and_whitespace() {
        assert_eq!(
            parse("   LIST ALL EMPLOYEES IN the Engineering department  "),
            QueryIntent::EmployeesInDepartment("engineering".into())
        );
    }

    #[test]
    fn test_unknown_sentence() {
        assert_eq!(parse("What's the weather like?"), QueryIntent::Unrecognized);
        assert_eq!(parse(""), QueryIntent::Unrecognized);
    }

    #[test]
    fn test_trigger_without_argument_is_unrecognized() {
        assert_eq!(parse("Who is the manager of Sales?"), QueryIntent::Unrecognized);
        assert_eq!(parse("List all employees hired after last spring"), QueryIntent::Unrecognized);
    }

    #[test]
    fn test_first_trigger_wins() {
        // "list all employees in" is checked before "hired after"; its regex
        // finds no department so the sentence is not retried as a date query.
        assert_eq!(
            parse("List all employees in the company hired after 2020-01-01"),
            QueryIntent::Unrecognized
        );
    }

    #[test]
    fn test_invalid_calendar_date() {
        let err = IntentParser::new()
            .parse("List all employees hired after 2021-13-45")
            .unwrap_err();
        assert!(matches!(err, Error::InvalidDate(ref d) if d == "2021-13-45"));
    }

    #[test]
    fn test_display() {
        assert_eq!(QueryIntent::ManagerOf("sales".into()).to_string(), "manager_of(sales)");
        assert_eq!(QueryIntent::Unrecognized.to_string(), "unrecognized");
    }
}
