mod endorsement;
mod game;
mod recommendation;

pub use endorsement::{EndorsementEvent, UserId};
pub use game::{GameId, GameRecord, GameSummary};
pub use recommendation::{
    RecommendationRequest, RecommendationResponse, RecommendationResult, Score, Strategy,
};
