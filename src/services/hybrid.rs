use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::{CollaborativeScorer, ContentScorer};
use crate::{
    data::EngineContext,
    error::{AppError, AppResult},
    models::{RecommendationResult, Strategy},
};

/// How the hybrid strategy uses content similarity when peer signal is short
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackPolicy {
    /// Fill exactly the shortfall, whether collaborative output was empty or partial
    #[default]
    TopUp,
    /// Use content for the full result only when collaborative output is empty
    ReplaceWhenEmpty,
}

/// Combines the collaborative and content scorers into one ranked list
pub struct HybridRanker {
    collaborative: CollaborativeScorer,
    content: ContentScorer,
    policy: FallbackPolicy,
}

impl HybridRanker {
    pub fn new(context: &EngineContext, policy: FallbackPolicy) -> Self {
        Self {
            collaborative: CollaborativeScorer::new(context),
            content: ContentScorer::new(context),
            policy,
        }
    }

    /// Produces at most `n` recommendations for `query_title`
    ///
    /// `GameNotFound` always propagates. A missing similarity row never does:
    /// the content strategy answers with an empty list and the hybrid strategy
    /// keeps whatever collaborative results it has.
    pub fn recommend(
        &self,
        query_title: &str,
        n: usize,
        strategy: Strategy,
    ) -> AppResult<Vec<RecommendationResult>> {
        if n == 0 {
            return Err(AppError::InvalidInput(
                "Result size must be at least 1".to_string(),
            ));
        }

        match strategy {
            Strategy::Collaborative => self.collaborative.score(query_title, n),
            Strategy::Content => self.content_or_empty(query_title, n, &HashSet::new()),
            Strategy::Hybrid => self.hybrid(query_title, n),
        }
    }

    fn hybrid(&self, query_title: &str, n: usize) -> AppResult<Vec<RecommendationResult>> {
        let mut results = self.collaborative.score(query_title, n)?;

        if results.len() >= n {
            return Ok(results);
        }
        if self.policy == FallbackPolicy::ReplaceWhenEmpty && !results.is_empty() {
            return Ok(results);
        }

        let remaining = n - results.len();
        let mut exclude: HashSet<String> = results.iter().map(|r| r.title.clone()).collect();
        exclude.insert(query_title.to_string());

        tracing::debug!(
            query = %query_title,
            collaborative = results.len(),
            remaining,
            policy = ?self.policy,
            "Falling back to content similarity"
        );

        let fill = self.content_or_empty(query_title, remaining, &exclude)?;
        results.extend(fill);

        Ok(results)
    }

    fn content_or_empty(
        &self,
        query_title: &str,
        n: usize,
        exclude: &HashSet<String>,
    ) -> AppResult<Vec<RecommendationResult>> {
        match self.content.score(query_title, n, exclude) {
            Err(AppError::ContentUnavailable(title)) => {
                tracing::debug!(query = %title, "No similarity row; content results empty");
                Ok(Vec::new())
            }
            other => other,
        }
    }
}
