//! SQLite employee table
//!
//! ```sql
//! CREATE TABLE IF NOT EXISTS employees (
//!     id       INTEGER PRIMARY KEY AUTOINCREMENT,
//!     name     TEXT    NOT NULL,
//!     age      INTEGER NOT NULL,
//!     salary   REAL    NOT NULL,
//!     hometown TEXT    NOT NULL
//! );
//! ```
//!
//! The table is created on connect if it does not exist yet. There is no
//! versioned migration step.

use std::str::FromStr;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Row, SqlitePool};

use super::{EmployeeRepository, StorageError, StorageResult};
use crate::employee::{Employee, EmployeeDetails, EmployeeId};

const CREATE_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS employees (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    age INTEGER NOT NULL,
    salary REAL NOT NULL,
    hometown TEXT NOT NULL
)";

const SELECT_SQL: &str = "SELECT id, name, age, salary, hometown FROM employees";

const SELECT_BY_ID_SQL: &str =
    "SELECT id, name, age, salary, hometown FROM employees WHERE id = ?";

const INSERT_SQL: &str = "INSERT INTO employees (name, age, salary, hometown) VALUES (?, ?, ?, ?)";

const UPSERT_SQL: &str = "INSERT INTO employees (id, name, age, salary, hometown)
VALUES (?, ?, ?, ?, ?)
ON CONFLICT(id) DO UPDATE SET
    name = excluded.name,
    age = excluded.age,
    salary = excluded.salary,
    hometown = excluded.hometown";

/// Employee repository backed by a SQLite connection pool
#[derive(Debug, Clone)]
pub struct SqliteEmployeeRepository {
    pool: SqlitePool,
}

impl SqliteEmployeeRepository {
    /// Connect to `database_url`, creating the database file and the
    /// `employees` table if needed.
    ///
    /// In-memory URLs get a single connection that is never recycled, since
    /// every SQLite memory connection is its own database.
    pub async fn connect(database_url: &str, max_connections: u32) -> StorageResult<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        let pool_options = if database_url.contains(":memory:") {
            // The database lives and dies with its one connection
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(max_connections)
        };

        let pool = pool_options.connect_with(options).await?;

        Self::with_pool(pool).await
    }

    /// Wrap an existing pool, creating the `employees` table if needed
    pub async fn with_pool(pool: SqlitePool) -> StorageResult<Self> {
        sqlx::query(CREATE_TABLE_SQL).execute(&pool).await?;
        tracing::debug!("employees table ready");
        Ok(Self { pool })
    }

    /// The underlying pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close every pooled connection
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

fn row_to_employee(row: &SqliteRow) -> StorageResult<Employee> {
    let age: i64 = row.try_get("age")?;
    let age = i32::try_from(age)
        .map_err(|_| StorageError::InvalidRow(format!("age {} out of range", age)))?;

    Ok(Employee {
        id: EmployeeId::new(row.try_get("id")?),
        name: row.try_get("name")?,
        age,
        salary: row.try_get("salary")?,
        hometown: row.try_get("hometown")?,
    })
}

#[async_trait]
impl EmployeeRepository for SqliteEmployeeRepository {
    async fn find_all(&self) -> StorageResult<Vec<Employee>> {
        let rows = sqlx::query(SELECT_SQL).fetch_all(&self.pool).await?;
        rows.iter().map(row_to_employee).collect()
    }

    async fn find_by_id(&self, id: EmployeeId) -> StorageResult<Option<Employee>> {
        let row = sqlx::query(SELECT_BY_ID_SQL)
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(row_to_employee).transpose()
    }

    async fn save(
        &self,
        id: Option<EmployeeId>,
        details: EmployeeDetails,
    ) -> StorageResult<Employee> {
        let id = match id {
            Some(id) => {
                sqlx::query(UPSERT_SQL)
                    .bind(id.value())
                    .bind(details.name.as_str())
                    .bind(details.age)
                    .bind(details.salary)
                    .bind(details.hometown.as_str())
                    .execute(&self.pool)
                    .await?;
                id
            }
            None => {
                let result = sqlx::query(INSERT_SQL)
                    .bind(details.name.as_str())
                    .bind(details.age)
                    .bind(details.salary)
                    .bind(details.hometown.as_str())
                    .execute(&self.pool)
                    .await?;
                EmployeeId::new(result.last_insert_rowid())
            }
        };

        Ok(Employee::from_details(id, details))
    }

    async fn delete_by_id(&self, id: EmployeeId) -> StorageResult<()> {
        sqlx::query("DELETE FROM employees WHERE id = ?")
            .bind(id.value())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn count(&self) -> StorageResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM employees")
            .fetch_one(&self.pool)
            .await?;
        Ok(count.max(0) as u64)
    }
}
