use std::collections::HashSet;
use std::sync::Arc;

use crate::{
    data::{Catalog, EngineContext, SimilarityIndex},
    error::{AppError, AppResult},
    models::{GameRecord, RecommendationResult, Score},
};

/// Ranks games by their precomputed similarity to the query game
pub struct ContentScorer {
    catalog: Arc<Catalog>,
    similarity: Arc<SimilarityIndex>,
}

impl ContentScorer {
    pub fn new(context: &EngineContext) -> Self {
        Self {
            catalog: Arc::clone(&context.catalog),
            similarity: Arc::clone(&context.similarity),
        }
    }

    /// Returns at most `n` of the most similar games, skipping `exclude`
    ///
    /// Fails with `GameNotFound` for titles outside the catalog and with
    /// `ContentUnavailable` for catalog games that have no similarity row.
    /// Scores are ordered as loaded, never clamped or rescaled.
    pub fn score(
        &self,
        query_title: &str,
        n: usize,
        exclude: &HashSet<String>,
    ) -> AppResult<Vec<RecommendationResult>> {
        let query = self.catalog.resolve(query_title)?;
        let row = self
            .similarity
            .row_of(&query.title)
            .ok_or_else(|| AppError::ContentUnavailable(query.title.clone()))?;

        let mut candidates: Vec<(&GameRecord, f64)> = self
            .similarity
            .neighbors(row)
            .filter(|&(id, _)| id != query.id)
            .filter_map(|(id, score)| self.catalog.get(id).map(|game| (game, score)))
            .filter(|(game, _)| !exclude.contains(&game.title))
            .collect();

        candidates.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.title.cmp(&b.0.title)));
        candidates.truncate(n);

        tracing::debug!(
            query = %query.title,
            excluded = exclude.len(),
            returned = candidates.len(),
            "Content scoring complete"
        );

        Ok(candidates
            .into_iter()
            .map(|(game, score)| RecommendationResult::from_game(game, Score::Similarity(score)))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::{game, scenario, similarity};
    use crate::data::Artifacts;

    fn titles(results: &[RecommendationResult]) -> Vec<&str> {
        results.iter().map(|r| r.title.as_str()).collect()
    }

    #[test]
    fn test_orders_by_similarity() {
        let scorer = ContentScorer::new(&scenario());
        let results = scorer.score("G1", 2, &HashSet::new()).unwrap();

        assert_eq!(titles(&results), vec!["G2", "G3"]);
        assert_eq!(results[0].score, Score::Similarity(0.8));
        assert_eq!(results[1].score, Score::Similarity(0.3));
    }

    #[test]
    fn test_never_returns_query_game() {
        let scorer = ContentScorer::new(&scenario());
        let results = scorer.score("G2", 10, &HashSet::new()).unwrap();
        assert_eq!(titles(&results), vec!["G1", "G3"]);
    }

    #[test]
    fn test_exclusions_are_skipped() {
        let scorer = ContentScorer::new(&scenario());
        let exclude: HashSet<String> = ["G2".to_string()].into_iter().collect();
        let results = scorer.score("G1", 2, &exclude).unwrap();
        assert_eq!(titles(&results), vec!["G3"]);
    }

    #[test]
    fn test_missing_row_is_content_unavailable() {
        let err = ContentScorer::new(&scenario())
            .score("G4", 3, &HashSet::new())
            .unwrap_err();
        assert!(matches!(err, AppError::ContentUnavailable(t) if t == "G4"));
    }

    #[test]
    fn test_unknown_title_is_game_not_found() {
        let err = ContentScorer::new(&scenario())
            .score("Nope", 3, &HashSet::new())
            .unwrap_err();
        assert!(matches!(err, AppError::GameNotFound(_)));
    }

    #[test]
    fn test_equal_scores_break_ties_by_title() {
        let context = EngineContext::build(Artifacts {
            games: vec![game(1, "Q", &[]), game(2, "Beta", &[]), game(3, "Alpha", &[])],
            interactions: Vec::new(),
            similarity: similarity(
                &["Q", "Beta", "Alpha"],
                &[&[1.0, 0.6, 0.6], &[0.6, 1.0, 0.2], &[0.6, 0.2, 1.0]],
            ),
        })
        .unwrap();

        let results = ContentScorer::new(&context)
            .score("Q", 2, &HashSet::new())
            .unwrap();
        assert_eq!(titles(&results), vec!["Alpha", "Beta"]);
    }

    #[test]
    fn test_negative_scores_are_not_clamped() {
        let context = EngineContext::build(Artifacts {
            games: vec![game(1, "Q", &[]), game(2, "Far", &[]), game(3, "Near", &[])],
            interactions: Vec::new(),
            similarity: similarity(
                &["Q", "Far", "Near"],
                &[&[1.0, -0.4, 0.1], &[-0.4, 1.0, 0.0], &[0.1, 0.0, 1.0]],
            ),
        })
        .unwrap();

        let results = ContentScorer::new(&context)
            .score("Q", 5, &HashSet::new())
            .unwrap();
        assert_eq!(titles(&results), vec!["Near", "Far"]);
        assert_eq!(results[1].score, Score::Similarity(-0.4));
    }
}
