//! Handlers for the `/pages` resource.
//!
//! Each handler extracts the path id and form fields, makes one store call,
//! and formats the outcome. Locking is internal to the store.

use axum::extract::rejection::{FormRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::Form;
use pages_core::error::CoreError;
use pages_core::page::{PageInput, MSG_FORM_PARSE, PAGE_ENTITY};
use pages_core::types::DbId;

use crate::error::{AppError, AppResult};
use crate::response::{ok, respond};
use crate::state::AppState;

/// Resolve the `{id}` segment.
///
/// Only all-digit segments name a page; anything else (`abc`, `-1`, `+1`)
/// is an unmatched route. A digit string that overflows `DbId` matched the
/// route but cannot be used, which is a server-side fault.
fn page_id(path: Result<Path<String>, PathRejection>) -> AppResult<DbId> {
    let Path(segment) = path
        .map_err(|rejection| AppError::InternalError(format!("Missing page id: {rejection}")))?;

    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::RouteNotMatched(segment));
    }
    segment
        .parse()
        .map_err(|err| AppError::InternalError(format!("Invalid page id '{segment}': {err}")))
}

/// Decode the form body; a rejection becomes the "Error parsing form"
/// validation error.
fn page_input(form: Result<Form<PageInput>, FormRejection>) -> Result<PageInput, CoreError> {
    form.map(|Form(input)| input).map_err(|rejection| {
        tracing::warn!(error = %rejection.body_text(), "Rejected request form");
        CoreError::Validation(MSG_FORM_PARSE.to_string())
    })
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: PAGE_ENTITY,
        id,
    })
}

/// GET /api/pages
pub async fn list(State(state): State<AppState>) -> Response {
    let pages = state.store.list_summaries().await;
    ok(&pages)
}

/// GET /api/pages/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> AppResult<Response> {
    let id = page_id(path)?;
    let page = state.store.get_by_id(id).await.ok_or_else(|| not_found(id))?;
    Ok(ok(&page))
}

/// POST /api/pages
pub async fn create(
    State(state): State<AppState>,
    form: Result<Form<PageInput>, FormRejection>,
) -> AppResult<Response> {
    let input = page_input(form)?;
    let page = state.store.create(input).await?;
    Ok(respond(StatusCode::CREATED, Some(&page)))
}

/// PUT /api/pages/{id}
pub async fn update(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    form: Result<Form<PageInput>, FormRejection>,
) -> AppResult<Response> {
    let id = page_id(path)?;
    let page = state.store.update_parsed(id, page_input(form)).await?;
    Ok(ok(&page))
}

/// DELETE /api/pages/{id}
pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> AppResult<Response> {
    let id = page_id(path)?;
    if state.store.delete(id).await {
        Ok(respond::<()>(StatusCode::NO_CONTENT, None))
    } else {
        Err(not_found(id))
    }
}
