//! In-memory employee table
//!
//! Ids are handed out from a counter starting at 1 and never reused, matching
//! an autoincrement primary key.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use super::{EmployeeRepository, StorageError, StorageResult};
use crate::employee::{Employee, EmployeeDetails, EmployeeId};

#[derive(Debug)]
struct Table {
    rows: HashMap<EmployeeId, Employee>,
    next_id: i64,
}

/// Employee repository backed by a mutex-guarded map
#[derive(Debug)]
pub struct InMemoryEmployeeRepository {
    table: Mutex<Table>,
}

impl InMemoryEmployeeRepository {
    pub fn new() -> Self {
        Self {
            table: Mutex::new(Table {
                rows: HashMap::new(),
                next_id: 1,
            }),
        }
    }

    fn lock(&self) -> StorageResult<MutexGuard<'_, Table>> {
        self.table.lock().map_err(|_| StorageError::Poisoned)
    }
}

impl Default for InMemoryEmployeeRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn find_all(&self) -> StorageResult<Vec<Employee>> {
        Ok(self.lock()?.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: EmployeeId) -> StorageResult<Option<Employee>> {
        Ok(self.lock()?.rows.get(&id).cloned())
    }

    async fn save(
        &self,
        id: Option<EmployeeId>,
        details: EmployeeDetails,
    ) -> StorageResult<Employee> {
        let mut table = self.lock()?;

        let id = match id {
            Some(id) => {
                // Keep the counter ahead of explicitly supplied ids
                table.next_id = table.next_id.max(id.value().saturating_add(1));
                id
            }
            None => {
                let id = EmployeeId::new(table.next_id);
                table.next_id = table.next_id.saturating_add(1);
                id
            }
        };

        let employee = Employee::from_details(id, details);
        table.rows.insert(id, employee.clone());
        Ok(employee)
    }

    async fn delete_by_id(&self, id: EmployeeId) -> StorageResult<()> {
        self.lock()?.rows.remove(&id);
        Ok(())
    }

    async fn count(&self) -> StorageResult<u64> {
        Ok(self.lock()?.rows.len() as u64)
    }
}
