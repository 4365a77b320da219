//! Handler for the service status endpoint.

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::instrument;

use crate::config::{SERVICE_NAME, STATUS_HEALTHY};
use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ServiceStatus {
    pub status: &'static str,
    pub service: &'static str,
    /// The kernel node name, not a container runtime id.
    pub container_id: String,
}

/// `GET /status`
#[instrument(name = "status::status", skip(state))]
pub async fn status(State(state): State<AppState>) -> Result<Json<ServiceStatus>, AppError> {
    Ok(Json(ServiceStatus {
        status: STATUS_HEALTHY,
        service: SERVICE_NAME,
        container_id: state.host.hostname()?,
    }))
}
