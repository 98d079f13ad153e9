//! userctl-server: HTTP service over a single `users` table
//!
//! Create, read and delete user records through JSON routes backed by a
//! PostgreSQL connection pool.

pub mod db;
pub mod http;
pub mod models;

pub use db::{DbConfig, DbError, UserStore};
pub use http::{run_server, ApiError, AppState, ServerConfig};
