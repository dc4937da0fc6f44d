//! Observability for the employee service
//!
//! Logging goes through `tracing`; this module owns the subscriber setup.

mod logger;

pub use logger::{init_logging, LogFormat, DEFAULT_FILTER};
