pub mod page;

use axum::http::StatusCode;

/// Fallback for unmatched paths and methods: `404` with an empty body.
pub async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}
