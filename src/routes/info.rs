//! Handler for the environment info endpoint.
//!
//! Reports the runtime labels resolved at startup from `PYTHON_VERSION` and
//! `ENVIRONMENT` (or their defaults) together with the current host name.

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::instrument;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct Info {
    pub python_version: String,
    pub environment: String,
    pub host: String,
}

/// `GET /info`
#[instrument(name = "info::info", skip(state))]
pub async fn info(State(state): State<AppState>) -> Result<Json<Info>, AppError> {
    let runtime = &state.config.runtime;
    Ok(Json(Info {
        python_version: runtime.python_version.clone(),
        environment: runtime.environment.clone(),
        host: state.host.hostname()?,
    }))
}
