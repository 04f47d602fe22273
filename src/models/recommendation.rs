use serde::{Deserialize, Serialize};

use super::{GameRecord, GameSummary};

/// Which signal source(s) a recommendation request should use
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Peer co-endorsement only
    Collaborative,
    /// Precomputed content similarity only
    Content,
    /// Collaborative first, content fills the shortfall
    #[default]
    Hybrid,
}

/// Score attached to a recommendation, tagged with the scorer that produced it
///
/// The two kinds are not comparable: one is a count of distinct co-endorsing
/// users, the other a raw similarity value from the precomputed matrix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Score {
    CoEndorsements(u32),
    Similarity(f64),
}

/// One ranked recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResult {
    pub title: String,
    pub genres: Vec<String>,
    pub tags: Vec<String>,
    pub score: Score,
}

impl RecommendationResult {
    pub fn from_game(game: &GameRecord, score: Score) -> Self {
        Self {
            title: game.title.clone(),
            genres: game.genres.clone(),
            tags: game.tags.clone(),
            score,
        }
    }
}

/// Body of `POST /api/v1/recommendations`
#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    pub title: String,
    #[serde(default)]
    pub n: Option<usize>,
    #[serde(default)]
    pub strategy: Strategy,
}

/// Ranked list for one query game
#[derive(Debug, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub query: GameSummary,
    pub strategy: Strategy,
    pub results: Vec<RecommendationResult>,
}
