//! GameVault Core - Domain entities, services, and traits.
//!
//! This crate contains the business rules for the game catalogue: which
//! fields are required, how platforms and games relate, and what happens
//! when a referenced platform is removed. It is database-agnostic and defines
//! the repository traits implemented by the `storage-sqlite` crate.

pub mod errors;
pub mod games;
pub mod platforms;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
