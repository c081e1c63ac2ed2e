use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use pages_core::error::CoreError;
use pages_core::page::{OperationResult, MSG_NOT_FOUND};
use serde_json::json;

use crate::response::respond;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Domain errors are answered with `200` and an [`OperationResult`]
/// envelope; only routing and internal failures change the status code.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `pages_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The path looked like a route but did not match its pattern.
    #[error("No route for path segment '{0}'")]
    RouteNotMatched(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let envelope = match self {
            AppError::Core(CoreError::NotFound { .. }) => OperationResult::error(MSG_NOT_FOUND),
            AppError::Core(CoreError::Validation(msg)) => OperationResult::error(msg),
            AppError::RouteNotMatched(segment) => {
                tracing::debug!(%segment, "Path segment is not a page id");
                return respond::<()>(StatusCode::NOT_FOUND, None);
            }
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                let body = json!({
                    "error": "An internal error occurred",
                    "code": "INTERNAL_ERROR",
                });
                return respond(StatusCode::INTERNAL_SERVER_ERROR, Some(&body));
            }
        };

        respond(StatusCode::OK, Some(&envelope))
    }
}
