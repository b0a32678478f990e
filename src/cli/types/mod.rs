//! Type-safe wrappers and enums for weekly usage data.

pub mod ids;
pub mod role;
pub mod time;
