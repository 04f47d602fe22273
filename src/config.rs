use serde::Deserialize;

use crate::services::FallbackPolicy;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Game catalog artifact (JSON array of games)
    #[serde(default = "default_catalog_path")]
    pub catalog_path: String,

    /// Endorsement log artifact (JSON array of user/game events)
    #[serde(default = "default_interactions_path")]
    pub interactions_path: String,

    /// Precomputed item-item similarity artifact
    #[serde(default = "default_similarity_path")]
    pub similarity_path: String,

    /// Result size used when a request does not specify one
    #[serde(default = "default_results")]
    pub default_results: usize,

    /// Largest result size a request may ask for
    #[serde(default = "default_max_results")]
    pub max_results: usize,

    /// How the hybrid strategy falls back to content similarity
    #[serde(default)]
    pub fallback_policy: FallbackPolicy,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_catalog_path() -> String {
    "data/games.json".to_string()
}

fn default_interactions_path() -> String {
    "data/recommendations.json".to_string()
}

fn default_similarity_path() -> String {
    "data/similarity.json".to_string()
}

fn default_results() -> usize {
    5
}

fn default_max_results() -> usize {
    50
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            catalog_path: default_catalog_path(),
            interactions_path: default_interactions_path(),
            similarity_path: default_similarity_path(),
            default_results: default_results(),
            max_results: default_max_results(),
            fallback_policy: FallbackPolicy::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let config = envy::from_env::<Config>()
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects result-size settings that could never serve a request
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.default_results == 0 {
            anyhow::bail!("DEFAULT_RESULTS must be at least 1");
        }
        if self.max_results < self.default_results {
            anyhow::bail!(
                "MAX_RESULTS ({}) must not be below DEFAULT_RESULTS ({})",
                self.max_results,
                self.default_results
            );
        }
        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
