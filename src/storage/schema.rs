//! Database schema definitions
//!
//! Column names double as display labels (`Hire_Date` renders as "Hire Date"),
//! so they must not be renamed casually.

/// SQL to create the Employees table
pub const CREATE_EMPLOYEES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS Employees (
    ID INTEGER PRIMARY KEY,
    Name TEXT NOT NULL,
    Department TEXT NOT NULL,
    Salary INTEGER NOT NULL,
    Hire_Date DATE NOT NULL
)
"#;

/// SQL to create the Departments table
pub const CREATE_DEPARTMENTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS Departments (
    ID INTEGER PRIMARY KEY,
    Name TEXT NOT NULL,
    Manager TEXT NOT NULL
)
"#;

/// All schema creation statements
pub fn all_schema_statements() -> Vec<&'static str> {
    vec![CREATE_EMPLOYEES_TABLE, CREATE_DEPARTMENTS_TABLE]
}
