use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Stable catalog identifier for a game (the Steam `app_id`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(pub u64);

impl Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A game known to the catalog
///
/// `title` is the public lookup key; `id` is the internal join key used by
/// the interaction log and the similarity index. `genres` and `tags` are
/// already normalized to their canonical ordered form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub id: GameId,
    pub title: String,
    pub genres: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl GameRecord {
    pub fn new(id: u64, title: impl Into<String>, genres: &[&str], tags: &[&str]) -> Self {
        Self {
            id: GameId(id),
            title: title.into(),
            genres: genres.iter().map(|g| g.to_string()).collect(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }
}

/// Public view of a game, without the internal id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSummary {
    pub title: String,
    pub genres: Vec<String>,
    pub tags: Vec<String>,
}

impl From<&GameRecord> for GameSummary {
    fn from(game: &GameRecord) -> Self {
        Self {
            title: game.title.clone(),
            genres: game.genres.clone(),
            tags: game.tags.clone(),
        }
    }
}
