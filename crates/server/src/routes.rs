use std::sync::Arc;

use axum::{routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;
use service::tender::{TenderRepository, TenderService};

use crate::openapi::ApiDoc;

pub mod tenders;

/// Shared handler state. The repository is injected once at startup.
#[derive(Clone)]
pub struct AppState {
    pub tenders: Arc<TenderService<dyn TenderRepository>>,
}

impl AppState {
    pub fn new(repo: Arc<dyn TenderRepository>) -> Self {
        Self { tenders: Arc::new(TenderService::new(repo)) }
    }
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "Service is up", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router: tender CRUD, dashboard stats, health and API docs.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let api = Router::new()
        .route("/api/tenders", get(tenders::list).post(tenders::create))
        .route("/api/tenders/stats", get(tenders::stats))
        .route(
            "/api/tenders/:id",
            get(tenders::get).put(tenders::update).delete(tenders::delete),
        );

    Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .merge(api)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
