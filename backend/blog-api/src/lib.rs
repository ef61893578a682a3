//! Blog API Library
//! Re-exports modules for the binary and for integration tests

pub mod config;
pub mod error;
pub mod logging;
pub mod routes;
pub mod schema;

pub use schema::{build_schema, shared, AppSchema, SharedStore};
