use std::collections::{BTreeSet, HashMap};

use super::Catalog;
use crate::{
    error::{AppError, AppResult},
    models::{EndorsementEvent, GameId, UserId},
};

/// Immutable snapshot of endorsement events, indexed both ways
///
/// Only positive endorsements are indexed. Each list is deduplicated and
/// sorted, so a user appears at most once per game and vice versa.
#[derive(Debug, Default)]
pub struct InteractionLog {
    event_count: usize,
    endorsers: HashMap<GameId, Vec<UserId>>,
    endorsed: HashMap<UserId, Vec<GameId>>,
}

impl InteractionLog {
    /// Indexes the events, rejecting any that reference a game outside the catalog
    pub fn new(events: &[EndorsementEvent], catalog: &Catalog) -> AppResult<Self> {
        let mut endorsers: HashMap<GameId, BTreeSet<UserId>> = HashMap::new();
        let mut endorsed: HashMap<UserId, BTreeSet<GameId>> = HashMap::new();

        for event in events {
            if !catalog.contains(event.game_id) {
                return Err(AppError::Artifact(format!(
                    "endorsement by user {} references unknown game id {}",
                    event.user_id, event.game_id
                )));
            }
            if !event.endorsed {
                continue;
            }
            endorsers
                .entry(event.game_id)
                .or_default()
                .insert(event.user_id);
            endorsed
                .entry(event.user_id)
                .or_default()
                .insert(event.game_id);
        }

        Ok(Self {
            event_count: events.len(),
            endorsers: endorsers
                .into_iter()
                .map(|(game, users)| (game, users.into_iter().collect()))
                .collect(),
            endorsed: endorsed
                .into_iter()
                .map(|(user, games)| (user, games.into_iter().collect()))
                .collect(),
        })
    }

    /// Distinct users who positively endorsed `game`
    pub fn endorsers_of(&self, game: GameId) -> &[UserId] {
        self.endorsers.get(&game).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Distinct games `user` positively endorsed
    pub fn endorsed_by(&self, user: UserId) -> &[GameId] {
        self.endorsed.get(&user).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of raw events loaded, including negative ones
    pub fn event_count(&self) -> usize {
        self.event_count
    }

    pub fn user_count(&self) -> usize {
        self.endorsed.len()
    }
}
