use std::sync::Arc;

use crate::{
    config::Config,
    data::EngineContext,
    services::{recommendations::ResultLimits, HybridRanker},
};

/// Shared application state
///
/// Everything here is read-only after startup, so handlers share it without
/// locks.
#[derive(Clone)]
pub struct AppState {
    pub context: EngineContext,
    pub ranker: Arc<HybridRanker>,
    pub limits: ResultLimits,
}

impl AppState {
    /// Wraps a loaded engine context with the configured ranking policy
    pub fn new(context: EngineContext, config: &Config) -> Self {
        let ranker = HybridRanker::new(&context, config.fallback_policy);
        Self {
            context,
            ranker: Arc::new(ranker),
            limits: ResultLimits {
                default: config.default_results,
                max: config.max_results,
            },
        }
    }
}
