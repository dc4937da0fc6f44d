//! Employee domain operations
//!
//! A thin layer over the repository. The only logic of its own is the update
//! path: look the record up, overwrite its mutable fields, save it back.

use std::sync::Arc;

use super::model::{Employee, EmployeeDetails, EmployeeId};
use crate::repository::{EmployeeRepository, StorageResult};

/// Result of an update attempt
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateOutcome {
    /// The record existed and was overwritten
    Updated(Employee),
    /// No record with this id exists; nothing was written
    NotFound(EmployeeId),
}

impl UpdateOutcome {
    /// The updated record, if any
    pub fn into_updated(self) -> Option<Employee> {
        match self {
            UpdateOutcome::Updated(employee) => Some(employee),
            UpdateOutcome::NotFound(_) => None,
        }
    }
}

/// Employee service
#[derive(Clone)]
pub struct EmployeeService {
    repository: Arc<dyn EmployeeRepository>,
}

impl EmployeeService {
    /// Create a service over the given storage collaborator
    pub fn new(repository: Arc<dyn EmployeeRepository>) -> Self {
        Self { repository }
    }

    /// Every employee, in storage order
    pub async fn get_all(&self) -> StorageResult<Vec<Employee>> {
        self.repository.find_all().await
    }

    pub async fn get_by_id(&self, id: EmployeeId) -> StorageResult<Option<Employee>> {
        self.repository.find_by_id(id).await
    }

    /// Store a new employee. Any id in `details` is ignored.
    pub async fn create(&self, details: EmployeeDetails) -> StorageResult<Employee> {
        let employee = self.repository.save(None, details).await?;
        tracing::info!(id = %employee.id, "employee created");
        Ok(employee)
    }

    /// Overwrite name, age, salary and hometown of an existing employee.
    ///
    /// Any id in `details` is ignored. An unknown `id` yields
    /// [`UpdateOutcome::NotFound`] and writes nothing.
    pub async fn update(
        &self,
        id: EmployeeId,
        details: EmployeeDetails,
    ) -> StorageResult<UpdateOutcome> {
        let Some(mut employee) = self.repository.find_by_id(id).await? else {
            return Ok(UpdateOutcome::NotFound(id));
        };

        employee.apply(details);
        let saved = self
            .repository
            .save(Some(employee.id), employee.details())
            .await?;

        tracing::info!(id = %saved.id, "employee updated");
        Ok(UpdateOutcome::Updated(saved))
    }

    /// Delete an employee. Unknown ids are not an error.
    pub async fn delete(&self, id: EmployeeId) -> StorageResult<()> {
        self.repository.delete_by_id(id).await?;
        tracing::info!(id = %id, "employee deleted");
        Ok(())
    }

    pub async fn count(&self) -> StorageResult<u64> {
        self.repository.count().await
    }
}
