//! SQLite storage implementation for Holdfolio.
//!
//! This crate provides all database-related functionality using Diesel ORM
//! with SQLite. It implements the repository traits defined in
//! `holdfolio-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - The asset repository implementation
//!
//! This crate is the only place in the application where Diesel dependencies
//! exist; everything above it is database-agnostic and works with traits.

pub mod assets;
pub mod db;
pub mod errors;
pub mod schema;

// Re-export database utilities
pub use db::{create_pool, get_connection, init, run_migrations, DbConnection, DbPool};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

// Re-export from holdfolio-core for convenience
pub use holdfolio_core::errors::{DatabaseError, Error, Result};
