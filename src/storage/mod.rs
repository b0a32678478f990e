//! Storage layer for the usage-roles CLI
//!
//! This module provides a thin abstraction over the SQLite database,
//! organized into logical components:
//! - `models`: Data structures
//! - `schema`: Database connection and schema management
//! - `queries`: Player and weekly usage reads/writes
//! - `records`: Season role record persistence

pub mod models;
pub mod queries;
pub mod records;
pub mod schema;


// Re-export the main types and database struct for easy access
pub use models::*;
pub use schema::UsageDatabase;
