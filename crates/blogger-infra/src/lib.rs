//! # Blogger Infrastructure
//!
//! Concrete implementations of the ports defined in `blogger-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL post store via SeaORM. Without it
//!   only the in-memory store is built.

pub mod database;
pub mod store;

pub use store::InMemoryPostStore;

#[cfg(feature = "postgres")]
pub use database::{DatabaseConnections, PostgresPostStore};
