use std::sync::Arc;
use std::time::Instant;

use super::{ArtifactSource, Artifacts, Catalog, InteractionLog, SimilarityIndex};
use crate::{error::AppResult, models::GameRecord};

/// Process-wide, read-only view of the loaded artifacts
///
/// Built once at startup and handed to the scorers. Nothing mutates it after
/// construction, so clones can be shared across request handlers and threads
/// without locking.
#[derive(Debug, Clone)]
pub struct EngineContext {
    pub catalog: Arc<Catalog>,
    pub interactions: Arc<InteractionLog>,
    pub similarity: Arc<SimilarityIndex>,
}

impl EngineContext {
    /// Normalizes and validates raw artifacts into the resident structures
    pub fn build(artifacts: Artifacts) -> AppResult<Self> {
        let games: Vec<GameRecord> = artifacts.games.into_iter().map(GameRecord::from).collect();
        let catalog = Catalog::new(games)?;
        let interactions = InteractionLog::new(&artifacts.interactions, &catalog)?;
        let similarity = SimilarityIndex::new(artifacts.similarity, &catalog)?;

        if similarity.len() < catalog.len() {
            tracing::info!(
                uncovered = catalog.len() - similarity.len(),
                "Some games have no similarity row; content fallback unavailable for them"
            );
        }

        Ok(Self {
            catalog: Arc::new(catalog),
            interactions: Arc::new(interactions),
            similarity: Arc::new(similarity),
        })
    }

    /// Loads artifacts from `source` and builds the context
    pub async fn load(source: &dyn ArtifactSource) -> AppResult<Self> {
        let start = Instant::now();
        tracing::info!(source = source.name(), "Loading recommendation artifacts");

        let artifacts = source.load().await?;
        let context = Self::build(artifacts)?;

        tracing::info!(
            games = context.catalog.len(),
            events = context.interactions.event_count(),
            users = context.interactions.user_count(),
            similarity_rows = context.similarity.len(),
            load_time_ms = start.elapsed().as_millis(),
            "Artifacts loaded"
        );

        Ok(context)
    }
}
