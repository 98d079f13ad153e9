//! Liveness check
//!
//! Answers from the process alone; a database outage still reports ok here
//! and shows up as 500s on the user routes instead.

use axum::{routing::get, Json, Router};
use serde::Serialize;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Liveness {
    pub status: &'static str,
    pub version: &'static str,
}

impl Liveness {
    const UP: Self = Self {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    };
}

/// GET /health
async fn liveness() -> Json<Liveness> {
    Json(Liveness::UP)
}

pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/health", get(liveness))
}
