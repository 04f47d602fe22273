pub mod collaborative;
pub mod content;
pub mod hybrid;
pub mod recommendations;

pub use collaborative::CollaborativeScorer;
pub use content::ContentScorer;
pub use hybrid::{FallbackPolicy, HybridRanker};
