//! Company records
//!
//! Two flat tables with no key relationship between them:
//! - `Employee`: a person, the free-text name of their department, salary, hire date
//! - `Department`: a department name and the free-text name of its manager
//!
//! Department names are matched case-insensitively by string equality, so the
//! two tables can drift apart without anything noticing.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An employee row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    /// Department name, free text (not a foreign key)
    pub department: String,
    pub salary: i64,
    pub hire_date: NaiveDate,
}

impl Employee {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        department: impl Into<String>,
        salary: i64,
        hire_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            department: department.into(),
            salary,
            hire_date,
        }
    }

    /// Whether this employee belongs to `department`, ignoring case
    #[cfg(test)]
    pub(crate) fn works_in(&self, department: &str) -> bool {
        self.department.to_lowercase() == department.to_lowercase()
    }
}

/// A department row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub id: i64,
    pub name: String,
    /// Manager name, free text
    pub manager: String,
}

impl Department {
    pub fn new(id: i64, name: impl Into<String>, manager: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            manager: manager.into(),
        }
    }
}
