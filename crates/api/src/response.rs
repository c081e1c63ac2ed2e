//! Single response-formatting path shared by every handler.
//!
//! Success payloads and domain-error envelopes are both written through
//! [`respond`], so every JSON response gets the same serialization,
//! `Content-Type` header, and failure handling.

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Serialize `payload` as JSON with the given status.
///
/// `None` produces an empty body with no content type. If serialization
/// fails the error is logged and an empty 500 is returned instead.
pub fn respond<T: Serialize + ?Sized>(status: StatusCode, payload: Option<&T>) -> Response {
    let Some(payload) = payload else {
        return status.into_response();
    };

    match serde_json::to_vec(payload) {
        Ok(body) => (
            status,
            [(CONTENT_TYPE, HeaderValue::from_static("application/json"))],
            Body::from(body),
        )
            .into_response(),
        Err(err) => {
            tracing::error!(error = %err, "Failed to serialize response body");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Shorthand for `200 OK` with a JSON body.
pub fn ok<T: Serialize + ?Sized>(payload: &T) -> Response {
    respond(StatusCode::OK, Some(payload))
}
