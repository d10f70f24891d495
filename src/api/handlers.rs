use axum::{extract::State, Extension, Json};
use serde_json::{json, Value};

use crate::{
    error::AppResult,
    middleware::request_id::RequestId,
    models::{RecommendationRequest, RecommendationResponse},
    services::recommendations,
};

use super::{AppJson, AppState};

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let snapshot = state.snapshot().await;
    Json(json!({
        "status": "healthy",
        "movies": snapshot.catalog.movies.len(),
        "books": snapshot.catalog.books.len(),
        "catalog_loaded_at": snapshot.loaded_at,
    }))
}

/// Recommends the best-matching catalog item for a genre list
pub async fn recommend(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    AppJson(request): AppJson<RecommendationRequest>,
) -> AppResult<Json<RecommendationResponse>> {
    tracing::info!(
        request_id = %request_id,
        kind = %request.kind,
        genre_count = request.genres.len(),
        "Processing recommendation request"
    );

    let snapshot = state.snapshot().await;
    let response = recommendations::recommend(&snapshot.catalog, &request)?;

    Ok(Json(response))
}
