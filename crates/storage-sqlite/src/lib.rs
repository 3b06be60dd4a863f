//! SQLite storage implementation for GameVault.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository traits defined in `gamevault-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations (schema creation at startup)
//! - Repository implementations for platforms and games
//! - Database-specific model types (with Diesel derives)
//!
//! # Architecture
//!
//! ```text
//!        core (domain)
//!              │
//!              ▼
//!   storage-sqlite (this crate)
//!              │
//!              ▼
//!          SQLite DB
//! ```
//!
//! Games live in the `items` table.

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod games;
pub mod platforms;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, get_db_path, init, ping, run_migrations, DbConnection, DbPool,
    WriteHandle,
};

// Re-export storage errors
pub use errors::StorageError;

// Re-export from gamevault-core for convenience
pub use gamevault_core::errors::{DatabaseError, Error, Result};
