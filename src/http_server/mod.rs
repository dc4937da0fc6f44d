//! # HTTP Server Module
//!
//! Axum server exposing the employee API.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `GET /api/employees` - List all employees
//! - `GET /api/employees/count` - Number of employees
//! - `POST /api/employees` - Create an employee
//! - `GET|PUT|DELETE /api/employees/{id}` - Read, overwrite, delete one employee

pub mod config;
pub mod employee_routes;
pub mod errors;
pub mod observability_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult};
pub use server::HttpServer;
