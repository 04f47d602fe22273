pub mod artifacts;
pub mod catalog;
pub mod context;
pub mod interactions;
pub mod similarity;

#[cfg(test)]
pub(crate) mod fixtures;

#[cfg(test)]
pub use artifacts::MockArtifactSource;
pub use artifacts::{ArtifactSource, Artifacts, JsonFileSource, LabelField, RawGameRecord};
pub use catalog::Catalog;
pub use context::EngineContext;
pub use interactions::InteractionLog;
pub use similarity::{RawSimilarity, SimilarityIndex};
