pub mod health;
pub mod page;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /pages                list, create
/// /pages/{id}           get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/pages", page::router())
}
