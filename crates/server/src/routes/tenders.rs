use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::info;

use models::tender::Tender;
use service::tender::TenderStats;

use crate::errors::JsonApiError;
use crate::routes::AppState;

#[utoipa::path(
    get, path = "/api/tenders", tag = "tenders",
    responses(
        (status = 200, description = "Every stored tender", body = [crate::openapi::TenderDoc]),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Tender>>, JsonApiError> {
    let all = state.tenders.find_all_tenders().await?;
    Ok(Json(all))
}

#[utoipa::path(
    get, path = "/api/tenders/{id}", tag = "tenders",
    params(("id" = i64, Path, description = "Tender ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::TenderDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Response, JsonApiError> {
    match state.tenders.find_tender_by_id(id).await? {
        Some(t) => Ok(Json(t).into_response()),
        None => Ok(StatusCode::NOT_FOUND.into_response()),
    }
}

/// Any `id` in the body is ignored; the store assigns one.
#[utoipa::path(
    post, path = "/api/tenders", tag = "tenders",
    request_body = crate::openapi::TenderDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::TenderDoc),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn create(State(state): State<AppState>, Json(mut input): Json<Tender>) -> Result<Json<Tender>, JsonApiError> {
    input.id = None;
    let created = state.tenders.save_tender(input).await?;
    info!(id = ?created.id, procurement_number = ?created.procurement_number, "created tender");
    Ok(Json(created))
}

/// Full replacement: every field of the stored record takes the body's value,
/// including fields the body leaves out.
#[utoipa::path(
    put, path = "/api/tenders/{id}", tag = "tenders",
    params(("id" = i64, Path, description = "Tender ID")),
    request_body = crate::openapi::TenderDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::TenderDoc),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(details): Json<Tender>,
) -> Result<Response, JsonApiError> {
    let Some(mut existing) = state.tenders.find_tender_by_id(id).await? else {
        return Ok(StatusCode::NOT_FOUND.into_response());
    };
    existing.overwrite_from(details);
    let updated = state.tenders.save_tender(existing).await?;
    info!(id, "updated tender");
    Ok(Json(updated).into_response())
}

#[utoipa::path(
    delete, path = "/api/tenders/{id}", tag = "tenders",
    params(("id" = i64, Path, description = "Tender ID")),
    responses(
        (status = 204, description = "Deleted, or nothing to delete"),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> Result<StatusCode, JsonApiError> {
    state.tenders.delete_tender_by_id(id).await?;
    info!(id, "deleted tender");
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get, path = "/api/tenders/stats", tag = "tenders",
    responses(
        (status = 200, description = "Dashboard summary", body = crate::openapi::TenderStatsDoc),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn stats(State(state): State<AppState>) -> Result<Json<TenderStats>, JsonApiError> {
    Ok(Json(state.tenders.summarize_tenders().await?))
}
