//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - One statement per call, no check-then-insert
//! - Conflicts come from DB constraints and are classified on the way out

pub mod users;

pub use users::UserRepo;
