use crate::{
    data::Catalog,
    error::{AppError, AppResult},
    models::{GameSummary, RecommendationRequest, RecommendationResponse},
    services::HybridRanker,
};

/// Bounds applied to the requested result size
#[derive(Debug, Clone, Copy)]
pub struct ResultLimits {
    pub default: usize,
    pub max: usize,
}

/// Answers one recommendation request
///
/// Resolves the query game for the response echo, applies the default and
/// maximum result size, then delegates ranking to the `HybridRanker`.
pub fn get_recommendations(
    ranker: &HybridRanker,
    catalog: &Catalog,
    request: RecommendationRequest,
    limits: ResultLimits,
) -> AppResult<RecommendationResponse> {
    let n = request.n.unwrap_or(limits.default);
    if n == 0 || n > limits.max {
        return Err(AppError::InvalidInput(format!(
            "n must be between 1 and {}",
            limits.max
        )));
    }

    let query = GameSummary::from(catalog.resolve(&request.title)?);
    let results = ranker.recommend(&request.title, n, request.strategy)?;

    if results.is_empty() {
        tracing::info!(query = %request.title, strategy = ?request.strategy, "No recommendations found");
    }

    Ok(RecommendationResponse {
        query,
        strategy: request.strategy,
        results,
    })
}
