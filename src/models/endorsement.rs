use serde::{Deserialize, Serialize};
use std::fmt::Display;

use super::GameId;

/// Opaque reviewer identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u64);

impl Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One user's verdict on one game
///
/// Field aliases accept the column names of the Steam review export
/// (`app_id`, `is_recommended`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndorsementEvent {
    pub user_id: UserId,
    #[serde(alias = "app_id")]
    pub game_id: GameId,
    #[serde(alias = "is_recommended")]
    pub endorsed: bool,
}

impl EndorsementEvent {
    pub fn new(user_id: u64, game_id: u64, endorsed: bool) -> Self {
        Self {
            user_id: UserId(user_id),
            game_id: GameId(game_id),
            endorsed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_steam_column_names() {
        let json = r#"{"user_id": 42, "app_id": 570, "is_recommended": true}"#;
        let event: EndorsementEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event, EndorsementEvent::new(42, 570, true));
    }

    #[test]
    fn test_deserialize_canonical_names() {
        let json = r#"{"user_id": 7, "game_id": 10, "endorsed": false}"#;
        let event: EndorsementEvent = serde_json::from_str(json).unwrap();
        assert!(!event.endorsed);
        assert_eq!(event.game_id, GameId(10));
    }
}
