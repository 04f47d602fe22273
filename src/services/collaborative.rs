use std::collections::HashMap;
use std::sync::Arc;

use crate::{
    data::{Catalog, EngineContext, InteractionLog},
    error::AppResult,
    models::{GameId, GameRecord, RecommendationResult, Score},
};

/// Ranks games by how many peers endorsed both them and the query game
pub struct CollaborativeScorer {
    catalog: Arc<Catalog>,
    interactions: Arc<InteractionLog>,
}

impl CollaborativeScorer {
    pub fn new(context: &EngineContext) -> Self {
        Self {
            catalog: Arc::clone(&context.catalog),
            interactions: Arc::clone(&context.interactions),
        }
    }

    /// Returns at most `n` co-endorsed games, best first
    ///
    /// The score is the number of distinct users who endorsed both the query
    /// game and the candidate. Ties are broken by title. An empty result means
    /// there is not enough peer signal; it is not an error.
    pub fn score(&self, query_title: &str, n: usize) -> AppResult<Vec<RecommendationResult>> {
        let query = self.catalog.resolve(query_title)?;

        let mut counts: HashMap<GameId, u32> = HashMap::new();
        let peers = self.interactions.endorsers_of(query.id);
        for &user in peers {
            for &game in self.interactions.endorsed_by(user) {
                if game != query.id {
                    *counts.entry(game).or_insert(0) += 1;
                }
            }
        }

        let mut candidates: Vec<(&GameRecord, u32)> = counts
            .into_iter()
            .filter_map(|(id, count)| self.catalog.get(id).map(|game| (game, count)))
            .collect();

        candidates.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.title.cmp(&b.0.title)));
        candidates.truncate(n);

        tracing::debug!(
            query = %query.title,
            peers = peers.len(),
            returned = candidates.len(),
            "Collaborative scoring complete"
        );

        Ok(candidates
            .into_iter()
            .map(|(game, count)| RecommendationResult::from_game(game, Score::CoEndorsements(count)))
            .collect())
    }
}
