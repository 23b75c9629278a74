//! Error responses.
//!
//! Two kinds of failure reach clients: a generator's validation error (400)
//! and an unmatched route (404). Body parsing adds its own 400/413 before a
//! generator runs. All error bodies are JSON.

use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::devices::ValidationError;
use crate::routing::table::available_routes;

/// Error type for HTTP handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Input failed a generator's checks.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Body declared as JSON but could not be parsed.
    #[error("Некорректное тело запроса: {0}")]
    MalformedBody(String),

    /// Body could not be read (too large, connection dropped).
    #[error(transparent)]
    UnreadableBody(#[from] BytesRejection),

    /// No route for this method + path.
    #[error("Route {method} {target} not found")]
    NotFound { method: String, target: String },
}

#[derive(Serialize)]
struct Failure {
    #[serde(skip_serializing_if = "Option::is_none")]
    success: Option<bool>,
    message: String,
    #[serde(rename = "availableRoutes", skip_serializing_if = "Option::is_none")]
    available_routes: Option<Vec<String>>,
}

impl Failure {
    fn new(message: String) -> Self {
        Self {
            success: Some(false),
            message,
            available_routes: None,
        }
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ApiError::UnreadableBody(rejection) => rejection.status(),
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();

        let body = match self {
            ApiError::Validation(err) if !err.reports_success_flag() => Failure {
                success: None,
                ..Failure::new(message)
            },
            ApiError::NotFound { .. } => Failure {
                available_routes: Some(available_routes()),
                ..Failure::new(message)
            },
            _ => Failure::new(message),
        };

        (status, Json(body)).into_response()
    }
}
