use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::host::LookupError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Host identity lookup failed: {0}")]
    HostLookup(#[from] LookupError),
}

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("Internal error: {}", self);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody {
                error: "Internal server error",
            }),
        )
            .into_response()
    }
}
