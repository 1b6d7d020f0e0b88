//! Intent to SQL translation
//!
//! Captured arguments are always bound as parameters, never spliced into SQL text.

use rusqlite::types::Value;
use super::intent::QueryIntent;

const EMPLOYEES_IN_DEPARTMENT: &str = r#"
SELECT Name, Department, Salary, Hire_Date
FROM Employees
WHERE LOWER(Department) = LOWER(?1)
ORDER BY ID
"#;

const MANAGER_OF: &str = r#"
SELECT Manager
FROM Departments
WHERE LOWER(Name) = LOWER(?1)
ORDER BY ID
"#;

const HIRED_AFTER: &str = r#"
SELECT Name, Department, Hire_Date
FROM Employees
WHERE Hire_Date > ?1
ORDER BY ID
"#;

const TOTAL_SALARY: &str = r#"
SELECT SUM(Salary) AS Total_Salary
FROM Employees
WHERE LOWER(Department) = LOWER(?1)
"#;

/// A statement plus its bound parameters
#[derive(Debug, Clone, PartialEq)]
pub struct SqlQuery {
    pub sql: &'static str,
    pub params: Vec<Value>,
}

impl SqlQuery {
    /// Build the lookup for an intent. `Unrecognized` has none.
    pub fn for_intent(intent: &QueryIntent) -> Option<Self> {
        let (sql, param) = match intent {
            QueryIntent::EmployeesInDepartment(dept) => (EMPLOYEES_IN_DEPARTMENT, dept.clone()),
            QueryIntent::ManagerOf(dept) => (MANAGER_OF, dept.clone()),
            // Hire dates are stored as ISO text, so string order is date order
            QueryIntent::HiredAfter(date) => (HIRED_AFTER, date.format("%Y-%m-%d").to_string()),
            QueryIntent::TotalSalary(dept) => (TOTAL_SALARY, dept.clone()),
            QueryIntent::Unrecognized => return None,
        };

        Some(Self {
            sql,
            params: vec![Value::Text(param)],
        })
    }
}
