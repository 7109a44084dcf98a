//! SQLite storage implementation for Coffer.
//!
//! This crate provides all database-related functionality using Diesel ORM
//! with SQLite. It implements the repository traits defined in
//! `coffer-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations (schema bootstrap and starter plan seed)
//! - Repository implementations for all domain entities
//! - Database-specific model types (with Diesel derives)
//!
//! # Architecture
//!
//! This crate is the only place in the application where Diesel
//! dependencies exist. `core` is database-agnostic and works with traits.
//!
//! Every mutation goes through a single writer actor that owns one
//! connection and wraps each job in an immediate transaction. That is what
//! makes a ledger effect atomic with its accompanying row change (approval
//! status flip, investment insert, claim completion): a crash or a
//! concurrent reader never observes one without the other, and two units
//! touching the same wallet can never interleave.

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod accounts;
pub mod investments;
pub mod plans;
pub mod transactions;
pub mod wallets;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, get_db_path, init, run_migrations, spawn_writer, DbConnection,
    DbPool, WriteHandle,
};

// Re-export storage errors
pub use errors::StorageError;

// Re-export from coffer-core for convenience
pub use coffer_core::errors::{DatabaseError, Error, Result};
