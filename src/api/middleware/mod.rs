//! HTTP middleware for request processing.

pub mod error_path;
pub mod tracing;
