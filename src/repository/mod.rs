//! # Employee Repository
//!
//! The storage collaborator behind the employee service. It exposes the
//! generic CRUD primitives over a single table keyed by `id`:
//!
//! - `find_all` - every row, in the backend's native order
//! - `find_by_id` - one row or nothing
//! - `save` - insert (no id) or overwrite (with id), returning the stored row
//! - `delete_by_id` - remove a row; absent ids are a no-op
//! - `count` - number of rows
//!
//! Two backends are provided: SQLite through `sqlx`, and an in-memory map.

mod errors;
mod memory;
mod sqlite;

use async_trait::async_trait;

use crate::employee::{Employee, EmployeeDetails, EmployeeId};

pub use errors::{StorageError, StorageResult};
pub use memory::InMemoryEmployeeRepository;
pub use sqlite::SqliteEmployeeRepository;

/// Persistence primitives for employee rows
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Fetch every employee. No ordering is guaranteed.
    async fn find_all(&self) -> StorageResult<Vec<Employee>>;

    /// Fetch one employee by id
    async fn find_by_id(&self, id: EmployeeId) -> StorageResult<Option<Employee>>;

    /// Persist an employee.
    ///
    /// With `id == None` a new row is inserted and storage assigns the id.
    /// With `Some(id)` the row with that id is overwritten, or created if it
    /// does not exist.
    async fn save(&self, id: Option<EmployeeId>, details: EmployeeDetails)
        -> StorageResult<Employee>;

    /// Delete the row with the given id, if any
    async fn delete_by_id(&self, id: EmployeeId) -> StorageResult<()>;

    /// Number of stored employees
    async fn count(&self) -> StorageResult<u64>;
}
