//! Renoplan Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic for Renoplan.
//! It is database-agnostic and defines traits that are implemented
//! by the `storage-sqlite` crate.

pub mod budgets;
pub mod constants;
pub mod contracts;
pub mod dashboard;
pub mod errors;
pub mod expenses;
pub mod schedule;
pub mod utils;
pub mod wishlist;
pub mod zones;

// Re-export common types from the dashboard module
pub use dashboard::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
