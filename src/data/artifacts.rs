//! Precomputed artifacts and the sources that load them.
//!
//! The engine reads three logical structures at startup: the game catalog,
//! the endorsement log and the similarity matrix. How they are serialized is
//! the concern of an [`ArtifactSource`]; [`JsonFileSource`] reads them from
//! JSON files on disk.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::RawSimilarity;
use crate::{
    config::Config,
    error::AppResult,
    models::{EndorsementEvent, GameId, GameRecord},
};

/// A genre or tag field as exported: either a list or one comma-separated string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LabelField {
    List(Vec<String>),
    Text(String),
}

/// Catalog row as exported, before normalization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawGameRecord {
    #[serde(alias = "app_id")]
    pub id: GameId,
    pub title: String,
    #[serde(default)]
    pub genres: Option<LabelField>,
    #[serde(default)]
    pub tags: Option<LabelField>,
}

impl From<RawGameRecord> for GameRecord {
    fn from(raw: RawGameRecord) -> Self {
        Self {
            id: raw.id,
            title: raw.title,
            genres: normalize_labels(raw.genres),
            tags: normalize_labels(raw.tags),
        }
    }
}

/// Canonical label form: ordered, trimmed, no empty entries
pub fn normalize_labels(field: Option<LabelField>) -> Vec<String> {
    let labels: Vec<String> = match field {
        None => return Vec::new(),
        Some(LabelField::List(items)) => items,
        Some(LabelField::Text(text)) => text.split(',').map(str::to_string).collect(),
    };

    labels
        .iter()
        .map(|label| label.trim())
        .filter(|label| !label.is_empty())
        .map(str::to_string)
        .collect()
}

/// Everything the engine needs, as loaded and not yet validated
#[derive(Debug, Clone, Default)]
pub struct Artifacts {
    pub games: Vec<RawGameRecord>,
    pub interactions: Vec<EndorsementEvent>,
    pub similarity: RawSimilarity,
}

/// Loader for the precomputed artifacts
///
/// Called once per process; the result is turned into an `EngineContext`
/// and never reloaded while serving.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait ArtifactSource: Send + Sync {
    /// Reads all three artifacts into memory
    async fn load(&self) -> AppResult<Artifacts>;

    /// Source name for logging
    fn name(&self) -> &'static str;
}

/// Reads the artifacts from three JSON documents
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    catalog_path: PathBuf,
    interactions_path: PathBuf,
    similarity_path: PathBuf,
}

impl JsonFileSource {
    pub fn new(
        catalog_path: impl Into<PathBuf>,
        interactions_path: impl Into<PathBuf>,
        similarity_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            catalog_path: catalog_path.into(),
            interactions_path: interactions_path.into(),
            similarity_path: similarity_path.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            &config.catalog_path,
            &config.interactions_path,
            &config.similarity_path,
        )
    }
}

#[async_trait::async_trait]
impl ArtifactSource for JsonFileSource {
    async fn load(&self) -> AppResult<Artifacts> {
        let (games, interactions, similarity) = tokio::try_join!(
            read_json::<Vec<RawGameRecord>>(&self.catalog_path),
            read_json::<Vec<EndorsementEvent>>(&self.interactions_path),
            read_json::<RawSimilarity>(&self.similarity_path),
        )?;

        Ok(Artifacts {
            games,
            interactions,
            similarity,
        })
    }

    fn name(&self) -> &'static str {
        "json-files"
    }
}

async fn read_json<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let bytes = tokio::fs::read(path).await.map_err(|e| {
        tracing::error!(path = %path.display(), error = %e, "Failed to read artifact");
        e
    })?;

    let value = serde_json::from_slice(&bytes).map_err(|e| {
        tracing::error!(path = %path.display(), error = %e, "Failed to parse artifact");
        e
    })?;

    tracing::debug!(path = %path.display(), bytes = bytes.len(), "Artifact read");

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use std::fs;

    #[test]
    fn test_normalize_comma_separated_text() {
        let labels = normalize_labels(Some(LabelField::Text("Action, RPG,, Indie ".to_string())));
        assert_eq!(labels, vec!["Action", "RPG", "Indie"]);
    }

    #[test]
    fn test_normalize_list_keeps_order() {
        let labels = normalize_labels(Some(LabelField::List(vec![
            " Strategy".to_string(),
            "".to_string(),
            "Simulation".to_string(),
        ])));
        assert_eq!(labels, vec!["Strategy", "Simulation"]);
    }

    #[test]
    fn test_normalize_missing_field() {
        assert!(normalize_labels(None).is_empty());
    }

    #[test]
    fn test_raw_record_accepts_both_label_shapes() {
        let json = r#"[
            {"app_id": 1, "title": "Terraria", "genres": ["Action", "Adventure"]},
            {"id": 2, "title": "Factorio", "genres": "Strategy, Simulation", "tags": "Automation"}
        ]"#;
        let raw: Vec<RawGameRecord> = serde_json::from_str(json).unwrap();
        let games: Vec<GameRecord> = raw.into_iter().map(GameRecord::from).collect();

        assert_eq!(games[0].genres, vec!["Action", "Adventure"]);
        assert!(games[0].tags.is_empty());
        assert_eq!(games[1].genres, vec!["Strategy", "Simulation"]);
        assert_eq!(games[1].tags, vec!["Automation"]);
    }

    #[tokio::test]
    async fn test_json_file_source_loads_all_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = dir.path().join("games.json");
        let interactions = dir.path().join("recommendations.json");
        let similarity = dir.path().join("similarity.json");

        fs::write(
            &catalog,
            r#"[{"app_id": 1, "title": "Celeste", "genres": "Platformer"}]"#,
        )
        .unwrap();
        fs::write(
            &interactions,
            r#"[{"user_id": 9, "app_id": 1, "is_recommended": true}]"#,
        )
        .unwrap();
        fs::write(&similarity, r#"{"titles": ["Celeste"], "scores": [[1.0]]}"#).unwrap();

        let source = JsonFileSource::new(&catalog, &interactions, &similarity);
        let artifacts = source.load().await.unwrap();

        assert_eq!(artifacts.games.len(), 1);
        assert_eq!(artifacts.interactions, vec![EndorsementEvent::new(9, 1, true)]);
        assert_eq!(artifacts.similarity.titles, vec!["Celeste"]);
    }

    #[tokio::test]
    async fn test_json_file_source_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = JsonFileSource::new(
            dir.path().join("missing.json"),
            dir.path().join("missing.json"),
            dir.path().join("missing.json"),
        );
        let err = source.load().await.unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
    }

    #[tokio::test]
    async fn test_json_file_source_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("games.json");
        fs::write(&path, "{not json").unwrap();
        let good = dir.path().join("empty.json");
        fs::write(&good, "[]").unwrap();
        let sim = dir.path().join("sim.json");
        fs::write(&sim, r#"{"titles": [], "scores": []}"#).unwrap();

        let source = JsonFileSource::new(&path, &good, &sim);
        let err = source.load().await.unwrap_err();
        assert!(matches!(err, AppError::Json(_)));
    }
}
