//! Data-access error classification
//!
//! Raw sqlx errors are sorted into not-found, conflict and everything else
//! here, so handlers never look at SQLSTATE codes.

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    #[error("conflict: {resource} {field} already exists")]
    Conflict {
        resource: &'static str,
        field: &'static str,
    },
}

impl DbError {
    /// Classify an insert failure: unique violations (SQLSTATE 23505)
    /// become `Conflict`, anything else stays a raw database error.
    pub fn on_insert(err: sqlx::Error, resource: &'static str, field: &'static str) -> Self {
        if is_unique_violation(&err) {
            Self::Conflict { resource, field }
        } else {
            Self::Sqlx(err)
        }
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(|db| db.is_unique_violation())
}
