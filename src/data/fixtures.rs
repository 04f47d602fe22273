//! Small hand-built datasets shared by the scorer tests.

use super::{Artifacts, EngineContext, RawGameRecord, RawSimilarity};
use crate::models::{EndorsementEvent, GameId};

pub fn game(id: u64, title: &str, genres: &[&str]) -> RawGameRecord {
    RawGameRecord {
        id: GameId(id),
        title: title.to_string(),
        genres: Some(super::LabelField::List(
            genres.iter().map(|g| g.to_string()).collect(),
        )),
        tags: None,
    }
}

pub fn similarity(titles: &[&str], scores: &[&[f64]]) -> RawSimilarity {
    RawSimilarity {
        titles: titles.iter().map(|t| t.to_string()).collect(),
        scores: scores.iter().map(|row| row.to_vec()).collect(),
    }
}

pub fn endorsements(pairs: &[(u64, u64)]) -> Vec<EndorsementEvent> {
    pairs
        .iter()
        .map(|&(user, game)| EndorsementEvent::new(user, game, true))
        .collect()
}

/// G1..G3 fully covered by the similarity index, plus G4 with no similarity row.
///
/// Users 1-3 endorse G1 and G2; user 4 endorses only G3; user 5 endorses G4
/// and G2; user 6 rejected G3 after endorsing G1.
pub fn scenario() -> EngineContext {
    let mut interactions = endorsements(&[
        (1, 1),
        (1, 2),
        (2, 1),
        (2, 2),
        (3, 1),
        (3, 2),
        (4, 3),
        (5, 4),
        (5, 2),
        (6, 1),
    ]);
    interactions.push(EndorsementEvent::new(6, 3, false));

    EngineContext::build(Artifacts {
        games: vec![
            game(1, "G1", &["Action"]),
            game(2, "G2", &["Action", "RPG"]),
            game(3, "G3", &["Puzzle"]),
            game(4, "G4", &["Indie"]),
        ],
        interactions,
        similarity: similarity(
            &["G1", "G2", "G3"],
            &[&[1.0, 0.8, 0.3], &[0.8, 1.0, 0.5], &[0.3, 0.5, 1.0]],
        ),
    })
    .expect("scenario fixture is valid")
}
