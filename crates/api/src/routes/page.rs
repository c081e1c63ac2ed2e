//! Route definitions for the `/pages` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::{self, page};
use crate::state::AppState;

/// Routes mounted at `/pages`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
///
/// Any other method on these paths falls through to a plain `404`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(page::list)
                .post(page::create)
                .fallback(handlers::not_found),
        )
        .route(
            "/{id}",
            get(page::get_by_id)
                .put(page::update)
                .delete(page::delete)
                .fallback(handlers::not_found),
        )
}
