//! Handler for the welcome endpoint.

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::instrument;

use crate::config::{SERVICE_VERSION, WELCOME_MESSAGE, WELCOME_STATUS};
use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct Welcome {
    pub message: &'static str,
    pub status: &'static str,
    pub version: &'static str,
    pub hostname: String,
}

/// `GET /`: welcome message with the current host name.
#[instrument(name = "home::index", skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Json<Welcome>, AppError> {
    Ok(Json(Welcome {
        message: WELCOME_MESSAGE,
        status: WELCOME_STATUS,
        version: SERVICE_VERSION,
        hostname: state.host.hostname()?,
    }))
}
