//! SQLite Repository Tests
//!
//! The storage contract against a real database file:
//! - ids are assigned by SQLite, starting at 1
//! - save with an id overwrites in place
//! - delete of an absent id is a no-op
//! - rows survive reconnecting to the same file

use employee_management::employee::{EmployeeDetails, EmployeeId};
use employee_management::repository::{EmployeeRepository, SqliteEmployeeRepository};
use tempfile::TempDir;

// =============================================================================
// Test Utilities
// =============================================================================

fn database_url(dir: &TempDir) -> String {
    format!("sqlite://{}", dir.path().join("employees.db").display())
}

async fn open(dir: &TempDir) -> SqliteEmployeeRepository {
    SqliteEmployeeRepository::connect(&database_url(dir), 2)
        .await
        .expect("Failed to open SQLite repository")
}

fn ana() -> EmployeeDetails {
    EmployeeDetails::new("Ana", 30, 5000.0, "Lima")
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn test_insert_assigns_sequential_ids() {
    let dir = TempDir::new().unwrap();
    let repo = open(&dir).await;

    let first = repo.save(None, ana()).await.unwrap();
    let second = repo
        .save(None, EmployeeDetails::new("Bea", 25, 4200.5, "Cusco"))
        .await
        .unwrap();

    assert_eq!(first.id, EmployeeId::new(1));
    assert_eq!(second.id, EmployeeId::new(2));
    assert_eq!(repo.count().await.unwrap(), 2);
}

#[tokio::test]
async fn test_find_by_id_round_trips_fields() {
    let dir = TempDir::new().unwrap();
    let repo = open(&dir).await;

    let created = repo
        .save(None, EmployeeDetails::new("Bea", 25, 4200.5, "Cusco"))
        .await
        .unwrap();
    let found = repo.find_by_id(created.id).await.unwrap();

    assert_eq!(found, Some(created));
    assert!(repo.find_by_id(EmployeeId::new(99)).await.unwrap().is_none());
}

#[tokio::test]
async fn test_save_with_id_overwrites() {
    let dir = TempDir::new().unwrap();
    let repo = open(&dir).await;
    let created = repo.save(None, ana()).await.unwrap();

    repo.save(Some(created.id), EmployeeDetails::new("Ana", 31, 5500.0, "Lima"))
        .await
        .unwrap();

    let found = repo.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(found.age, 31);
    assert_eq!(found.salary, 5500.0);
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_delete_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let repo = open(&dir).await;
    let created = repo.save(None, ana()).await.unwrap();

    repo.delete_by_id(created.id).await.unwrap();
    repo.delete_by_id(created.id).await.unwrap();
    repo.delete_by_id(EmployeeId::new(1000)).await.unwrap();

    assert!(repo.find_by_id(created.id).await.unwrap().is_none());
    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_ids_not_reused_after_delete() {
    let dir = TempDir::new().unwrap();
    let repo = open(&dir).await;

    let first = repo.save(None, ana()).await.unwrap();
    repo.delete_by_id(first.id).await.unwrap();
    let second = repo.save(None, ana()).await.unwrap();

    assert_eq!(second.id, EmployeeId::new(2));
}

#[tokio::test]
async fn test_count_matches_find_all() {
    let dir = TempDir::new().unwrap();
    let repo = open(&dir).await;
    for age in 20..25 {
        repo.save(None, EmployeeDetails::new("Emp", age, 1000.0, "Lima"))
            .await
            .unwrap();
    }
    repo.delete_by_id(EmployeeId::new(3)).await.unwrap();

    let all = repo.find_all().await.unwrap();
    assert_eq!(all.len(), 4);
    assert_eq!(repo.count().await.unwrap(), all.len() as u64);
}

#[tokio::test]
async fn test_rows_survive_reconnect() {
    let dir = TempDir::new().unwrap();

    let created = {
        let repo = open(&dir).await;
        let created = repo.save(None, ana()).await.unwrap();
        repo.close().await;
        created
    };

    let repo = open(&dir).await;
    assert_eq!(repo.find_by_id(created.id).await.unwrap(), Some(created));
}

#[tokio::test]
async fn test_memory_url_is_single_database() {
    let repo = SqliteEmployeeRepository::connect("sqlite::memory:", 5)
        .await
        .unwrap();

    let created = repo.save(None, ana()).await.unwrap();

    assert_eq!(repo.count().await.unwrap(), 1);
    assert_eq!(repo.find_by_id(created.id).await.unwrap(), Some(created));
}
