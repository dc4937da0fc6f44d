//! # Employee Module
//!
//! The employee entity and the domain operations over it: list, get,
//! create, update, delete and count.

mod model;
mod service;

pub use model::{Employee, EmployeeDetails, EmployeeId};
pub use service::{EmployeeService, UpdateOutcome};
