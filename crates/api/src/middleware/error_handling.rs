//! # Error Handling Middleware
//!
//! Maps [`HoursError`] values to HTTP status codes and JSON error bodies so
//! every endpoint reports failures the same way.
//!
//! Invalid schedules additionally carry a `details` array with one entry per
//! offending weekday, letting clients highlight every bad day at once.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use workhours_core::errors::HoursError;

/// Application error wrapper that provides HTTP status code mapping
///
/// Handlers return `Result<_, AppError>` and use `?` on anything yielding a
/// [`HoursError`] or an [`eyre::Report`].
#[derive(Debug)]
pub struct AppError(pub HoursError);

impl AppError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            HoursError::NotFound(_) => StatusCode::NOT_FOUND,
            HoursError::Validation(_) => StatusCode::BAD_REQUEST,
            HoursError::InvalidSchedule(_) => StatusCode::BAD_REQUEST,
            HoursError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            HoursError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!("Request failed: {}", self.0);
        }

        let message = self.0.to_string();
        let body = match &self.0 {
            HoursError::InvalidSchedule(errors) => Json(json!({
                "error": message,
                "details": errors,
            })),
            _ => Json(json!({ "error": message })),
        };

        (status, body).into_response()
    }
}

impl From<HoursError> for AppError {
    fn from(err: HoursError) -> Self {
        AppError(err)
    }
}

impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(HoursError::Store(err))
    }
}

/// Maps a HoursError to an HTTP response
pub fn map_error(err: HoursError) -> Response {
    AppError(err).into_response()
}
