use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::appointment::AppointmentStatus;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid status transition: {0} -> {1}")]
    InvalidTransition(AppointmentStatus, AppointmentStatus),

    #[error("Stale response: superseded by a newer fetch")]
    StaleResponse,

    #[error("Internal Server Error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Network(msg) => (StatusCode::BAD_GATEWAY, msg.clone()),
            AppError::InvalidTransition(_, _) => (StatusCode::CONFLICT, self.to_string()),
            AppError::StaleResponse => (StatusCode::CONFLICT, self.to_string()),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        tracing::error!("Error: {}: {}", status, message);

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
