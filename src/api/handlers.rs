use axum::{extract::State, http::StatusCode, Extension, Json};
use serde_json::{json, Value};

use crate::{
    error::AppResult,
    middleware::request_id::RequestId,
    models::{GameSummary, RecommendationRequest, RecommendationResponse},
    services::recommendations,
};

use super::AppState;

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Every catalog game, sorted by title
pub async fn list_games(State(state): State<AppState>) -> Json<Vec<GameSummary>> {
    Json(state.context.catalog.sorted_summaries())
}

/// Ranked recommendations for one query game
pub async fn recommend(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<RecommendationRequest>,
) -> AppResult<Json<RecommendationResponse>> {
    tracing::info!(
        request_id = %request_id,
        title = %request.title,
        n = ?request.n,
        strategy = ?request.strategy,
        "Processing recommendation request"
    );

    let response = recommendations::get_recommendations(
        &state.ranker,
        &state.context.catalog,
        request,
        state.limits,
    )
    .map_err(|e| {
        tracing::warn!(request_id = %request_id, error = %e, "Recommendation request failed");
        e
    })?;

    tracing::info!(
        request_id = %request_id,
        returned = response.results.len(),
        "Recommendations served"
    );

    Ok(Json(response))
}
