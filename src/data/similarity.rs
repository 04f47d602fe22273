use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::Catalog;
use crate::{
    error::{AppError, AppResult},
    models::GameId,
};

/// On-disk shape of the precomputed similarity artifact
///
/// Row and column `i` of `scores` both belong to `titles[i]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawSimilarity {
    pub titles: Vec<String>,
    pub scores: Vec<Vec<f64>>,
}

/// Square item-item similarity matrix plus its title lookup
///
/// Not every catalog game has a row; a missing row means content similarity
/// is unavailable for that game. Scores are kept exactly as loaded.
#[derive(Debug, Default)]
pub struct SimilarityIndex {
    games: Vec<GameId>,
    by_title: HashMap<String, usize>,
    scores: Vec<Vec<f64>>,
}

impl SimilarityIndex {
    /// Validates shape and catalog coverage of the raw artifact
    pub fn new(raw: RawSimilarity, catalog: &Catalog) -> AppResult<Self> {
        let size = raw.titles.len();
        if raw.scores.len() != size {
            return Err(AppError::Artifact(format!(
                "similarity matrix has {} rows for {} titles",
                raw.scores.len(),
                size
            )));
        }

        let mut games = Vec::with_capacity(size);
        let mut by_title = HashMap::with_capacity(size);

        for (row, title) in raw.titles.into_iter().enumerate() {
            if raw.scores[row].len() != size {
                return Err(AppError::Artifact(format!(
                    "similarity row for '{}' has {} columns, expected {}",
                    title,
                    raw.scores[row].len(),
                    size
                )));
            }
            let game = catalog.get_by_title(&title).ok_or_else(|| {
                AppError::Artifact(format!(
                    "similarity index references unknown title '{}'",
                    title
                ))
            })?;
            let self_score = raw.scores[row][row];
            if self_score != 1.0 {
                tracing::warn!(title = %title, self_score, "Similarity diagonal is not 1.0");
            }
            games.push(game.id);
            if by_title.insert(title.clone(), row).is_some() {
                return Err(AppError::Artifact(format!(
                    "duplicate similarity row for '{}'",
                    title
                )));
            }
        }

        Ok(Self {
            games,
            by_title,
            scores: raw.scores,
        })
    }

    /// Row position of `title`, if the index covers it
    pub fn row_of(&self, title: &str) -> Option<usize> {
        self.by_title.get(title).copied()
    }

    /// Similarity of row `row` to every covered game, paired with that game's id
    pub fn neighbors(&self, row: usize) -> impl Iterator<Item = (GameId, f64)> + '_ {
        self.games
            .iter()
            .copied()
            .zip(self.scores[row].iter().copied())
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}
