//! Health check endpoint for container orchestration.
//!
//! Provides a liveness/readiness probe that returns 200 OK whenever the
//! process can respond to HTTP. It touches no host or environment state, so
//! it cannot fail while the server is up.

use axum::Json;
use serde::Serialize;

use crate::config::HEALTH_OK;

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
}

/// Health check handler.
pub async fn health() -> Json<Health> {
    Json(Health { status: HEALTH_OK })
}
