use std::collections::HashMap;

use crate::{
    error::{AppError, AppResult},
    models::{GameId, GameRecord, GameSummary},
};

/// Immutable table of known games with title and id lookups
#[derive(Debug)]
pub struct Catalog {
    games: Vec<GameRecord>,
    by_title: HashMap<String, usize>,
    by_id: HashMap<GameId, usize>,
}

impl Catalog {
    /// Builds the catalog, rejecting duplicate ids or titles
    pub fn new(games: Vec<GameRecord>) -> AppResult<Self> {
        let mut by_title = HashMap::with_capacity(games.len());
        let mut by_id = HashMap::with_capacity(games.len());

        for (row, game) in games.iter().enumerate() {
            if by_id.insert(game.id, row).is_some() {
                return Err(AppError::Artifact(format!(
                    "duplicate game id {} in catalog",
                    game.id
                )));
            }
            if by_title.insert(game.title.clone(), row).is_some() {
                return Err(AppError::Artifact(format!(
                    "duplicate title '{}' in catalog",
                    game.title
                )));
            }
        }

        Ok(Self {
            games,
            by_title,
            by_id,
        })
    }

    /// Resolves a query title, failing with `GameNotFound` when absent
    ///
    /// Matching is exact and case-sensitive.
    pub fn resolve(&self, title: &str) -> AppResult<&GameRecord> {
        self.get_by_title(title)
            .ok_or_else(|| AppError::GameNotFound(title.to_string()))
    }

    pub fn get_by_title(&self, title: &str) -> Option<&GameRecord> {
        self.by_title.get(title).map(|&row| &self.games[row])
    }

    pub fn get(&self, id: GameId) -> Option<&GameRecord> {
        self.by_id.get(&id).map(|&row| &self.games[row])
    }

    pub fn contains(&self, id: GameId) -> bool {
        self.by_id.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Every game as a public summary, ordered by title
    pub fn sorted_summaries(&self) -> Vec<GameSummary> {
        let mut summaries: Vec<GameSummary> = self.games.iter().map(GameSummary::from).collect();
        summaries.sort_by(|a, b| a.title.cmp(&b.title));
        summaries
    }
}
