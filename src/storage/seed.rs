//! First-run sample data

use chrono::NaiveDate;
use crate::model::{Department, Employee};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date")
}

/// Employees inserted when the Employees table is empty
pub fn sample_employees() -> Vec<Employee> {
    vec![
        Employee::new(1, "Alice", "Sales", 50000, date(2021, 1, 15)),
        Employee::new(2, "Bob", "Engineering", 70000, date(2020, 6, 10)),
        Employee::new(3, "Charlie", "Marketing", 60000, date(2022, 3, 20)),
    ]
}

/// Departments inserted alongside the sample employees
pub fn sample_departments() -> Vec<Department> {
    vec![
        Department::new(1, "Sales", "Alice"),
        Department::new(2, "Engineering", "Bob"),
        Department::new(3, "Marketing", "Charlie"),
    ]
}
