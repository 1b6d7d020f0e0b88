//! SQLite storage implementation

use std::path::Path;
use rusqlite::types::ValueRef;
use rusqlite::{Connection, params, params_from_iter};
use serde::Serialize;
use crate::Result;
use crate::model::{Department, Employee};
use crate::query::SqlQuery;
use super::{schema, seed};

/// SQLite-backed storage for the company tables
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open a database file (creates and seeds it if needed)
    pub fn open(path: &Path) -> Result<Self> {
        tracing::debug!("Opening database {}", path.display());
        let conn = Connection::open(path)?;
        let mut store = Self { conn };
        store.initialize_schema()?;
        store.seed_if_empty()?;
        Ok(store)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut store = Self { conn };
        store.initialize_schema()?;
        store.seed_if_empty()?;
        Ok(store)
    }

    /// Open an in-memory database with the schema but no rows
    pub fn open_in_memory_empty() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize the database schema
    fn initialize_schema(&self) -> Result<()> {
        for stmt in schema::all_schema_statements() {
            self.conn.execute(stmt, [])?;
        }
        Ok(())
    }

    /// Insert the sample rows when the Employees table has none.
    ///
    /// Returns whether anything was inserted.
    pub fn seed_if_empty(&mut self) -> Result<bool> {
        if self.count_employees()? > 0 {
            return Ok(false);
        }

        let tx = self.conn.transaction()?;
        for employee in seed::sample_employees() {
            insert_employee_with(&tx, &employee)?;
        }
        for department in seed::sample_departments() {
            insert_department_with(&tx, &department)?;
        }
        tx.commit()?;

        tracing::info!("Seeded empty database with sample employees and departments");
        Ok(true)
    }

    // ========== Row Operations ==========

    /// Insert an employee
    pub fn insert_employee(&self, employee: &Employee) -> Result<()> {
        insert_employee_with(&self.conn, employee)
    }

    /// Insert a department
    pub fn insert_department(&self, department: &Department) -> Result<()> {
        insert_department_with(&self.conn, department)
    }

    /// All employees, by ID
    #[cfg(test)]
    pub(crate) fn employees(&self) -> Result<Vec<Employee>> {
        let mut stmt = self.conn.prepare(
            "SELECT ID, Name, Department, Salary, Hire_Date FROM Employees ORDER BY ID"
        )?;

        let employees = stmt
            .query_map([], |row| {
                Ok(Employee {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    department: row.get(2)?,
                    salary: row.get(3)?,
                    hire_date: row.get(4)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(employees)
    }

    /// All departments, by ID
    #[cfg(test)]
    pub(crate) fn departments(&self) -> Result<Vec<Department>> {
        let mut stmt = self.conn.prepare(
            "SELECT ID, Name, Manager FROM Departments ORDER BY ID"
        )?;

        let departments = stmt
            .query_map([], |row| {
                Ok(Department {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    manager: row.get(2)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(departments)
    }

    /// Count all employees
    pub fn count_employees(&self) -> Result<usize> {
        let count: i64 = self.conn.query_row("SELECT COUNT(*) FROM Employees", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Count all departments
    pub fn count_departments(&self) -> Result<usize> {
        let count: i64 = self.conn.query_row("SELECT COUNT(*) FROM Departments", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Get database statistics
    pub fn stats(&self) -> Result<DbStats> {
        Ok(DbStats {
            employees: self.count_employees()?,
            departments: self.count_departments()?,
        })
    }

    // ========== Query Execution ==========

    /// Run a parameterized query and collect every row
    pub fn run(&self, query: &SqlQuery) -> Result<ResultSet> {
        let mut stmt = self.conn.prepare(query.sql)?;
        let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();

        let mut rows = Vec::new();
        let mut cursor = stmt.query(params_from_iter(query.params.iter()))?;
        while let Some(row) = cursor.next()? {
            let mut cells = Vec::with_capacity(columns.len());
            for idx in 0..columns.len() {
                cells.push(Cell::from(row.get_ref(idx)?));
            }
            rows.push(cells);
        }

        tracing::debug!("Query returned {} row(s)", rows.len());
        Ok(ResultSet { columns, rows })
    }

    #[cfg(test)]
    pub(crate) fn execute_batch(&self, sql: &str) -> Result<()> {
        self.conn.execute_batch(sql)?;
        Ok(())
    }
}

fn insert_employee_with(conn: &Connection, employee: &Employee) -> Result<()> {
    conn.execute(
        r#"
        INSERT INTO Employees (ID, Name, Department, Salary, Hire_Date)
        VALUES (?1, ?2, ?3, ?4, ?5)
        "#,
        params![
            employee.id,
            employee.name,
            employee.department,
            employee.salary,
            employee.hire_date,
        ],
    )?;
    Ok(())
}

fn insert_department_with(conn: &Connection, department: &Department) -> Result<()> {
    conn.execute(
        "INSERT INTO Departments (ID, Name, Manager) VALUES (?1, ?2, ?3)",
        params![department.id, department.name, department.manager],
    )?;
    Ok(())
}

/// A single value read back from SQLite
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
}

impl From<ValueRef<'_>> for Cell {
    fn from(value: ValueRef<'_>) -> Self {
        match value {
            ValueRef::Null => Cell::Null,
            ValueRef::Integer(i) => Cell::Integer(i),
            ValueRef::Real(f) => Cell::Real(f),
            ValueRef::Text(bytes) => Cell::Text(String::from_utf8_lossy(bytes).into_owned()),
            ValueRef::Blob(bytes) => Cell::Text(format!("<{} bytes>", bytes.len())),
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Null => write!(f, "None"),
            Cell::Integer(i) => write!(f, "{}", i),
            Cell::Real(r) => write!(f, "{}", r),
            Cell::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Column names plus rows, in the order SQLite returned them
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultSet {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl ResultSet {
    /// True when SQLite returned no rows at all.
    ///
    /// An aggregate over zero rows still yields one row of NULLs, so it is not empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Database statistics
#[derive(Debug, Clone)]
pub struct DbStats {
    pub employees: usize,
    pub departments: usize,
}

impl std::fmt::Display for DbStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Database Statistics:")?;
        writeln!(f, "  Employees: {}", self.employees)?;
        writeln!(f, "  Departments: {}", self.departments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rusqlite::types::Value;

    fn text_query(sql: &'static str, param: &str) -> SqlQuery {
        SqlQuery { sql, params: vec![Value::Text(param.to_string())] }
    }

    #[test]
    fn test_open_seeds_once() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        assert_eq!(store.count_employees().unwrap(), 3);
        assert_eq!(store.count_departments().unwrap(), 3);
        assert_eq!(store.departments().unwrap()[1].manager, "Bob");

        assert!(!store.seed_if_empty().unwrap());
        assert_eq!(store.count_employees().unwrap(), 3);
    }

    #[test]
    fn test_empty_store_has_schema_only() {
        let store = SqliteStore::open_in_memory_empty().unwrap();
        let stats = store.stats().unwrap();
        assert_eq!(stats.employees, 0);
        assert_eq!(stats.departments, 0);
    }

    #[test]
    fn test_employee_roundtrip() {
        let store = SqliteStore::open_in_memory_empty().unwrap();
        let hired = NaiveDate::from_ymd_opt(2019, 11, 3).unwrap();
        store.insert_employee(&Employee::new(7, "Dana", "Support", 45000, hired)).unwrap();

        let employees = store.employees().unwrap();
        assert_eq!(employees.len(), 1);
        assert_eq!(employees[0].name, "Dana");
        assert_eq!(employees[0].hire_date, hired);
    }

    #[test]
    fn test_run_collects_columns_and_cells() {
        let store = SqliteStore::open_in_memory().unwrap();
        let result = store
            .run(&text_query("SELECT Name, Salary FROM Employees WHERE Department = ?1", "Engineering"))
            .unwrap();

        assert_eq!(result.columns, vec!["Name", "Salary"]);
        assert_eq!(result.rows, vec![vec![Cell::Text("Bob".into()), Cell::Integer(70000)]]);
        assert!(!result.is_empty());
    }

    #[test]
    fn test_aggregate_over_no_rows_keeps_null_row() {
        let store = SqliteStore::open_in_memory().unwrap();
        let result = store
            .run(&text_query("SELECT SUM(Salary) FROM Employees WHERE Department = ?1", "Legal"))
            .unwrap();

        assert_eq!(result.rows, vec![vec![Cell::Null]]);
        assert!(!result.is_empty());
        assert_eq!(Cell::Null.to_string(), "None");
    }

    #[test]
    fn test_no_matching_rows_is_empty() {
        let store = SqliteStore::open_in_memory().unwrap();
        let result = store
            .run(&text_query("SELECT Name FROM Employees WHERE Department = ?1", "Legal"))
            .unwrap();

        assert!(result.is_empty());
    }

    #[test]
    fn test_bad_sql_is_storage_error() {
        let store = SqliteStore::open_in_memory().unwrap();
        let err = store.run(&text_query("SELECT Nope FROM Employees WHERE ?1", "x")).unwrap_err();
        assert!(err.is_storage());
    }
}
