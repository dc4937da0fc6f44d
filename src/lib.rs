//! employee-management - HTTP backend for employee records
//!
//! Layers, top to bottom:
//! - `http_server`: axum routes under `/api/employees`
//! - `employee`: the entity and its domain operations
//! - `repository`: the storage collaborator (SQLite or in-memory)

pub mod cli;
pub mod employee;
pub mod http_server;
pub mod observability;
pub mod repository;
