//! Database layer - connection pool, schema and user store
//!
//! # Design Principles
//!
//! - Connection pool (max 5 connections), injected, never global
//! - One statement per store call, no connection held across statements
//! - Rely on DB constraints, classify conflicts - no check-then-insert

pub mod error;
pub mod memory;
pub mod pool;
pub mod repos;
pub mod schema;
pub mod store;

pub use error::DbError;
pub use memory::MemoryUserStore;
pub use pool::{create_pool, create_pool_with_options, whoami, DbConfig};
pub use repos::UserRepo;
pub use schema::ensure_schema;
pub use store::UserStore;
