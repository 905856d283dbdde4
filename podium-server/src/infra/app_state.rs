use std::fmt;
use std::sync::Arc;

use podium_core::Leaderboard;
use podium_model::{AlgorithmEntry, ModelEntry};

use crate::infra::config::{Config, ResultsConfig};

/// Shared, read-only state behind every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub algorithms: Arc<Leaderboard<AlgorithmEntry>>,
    pub models: Arc<Leaderboard<ModelEntry>>,
}

impl AppState {
    pub fn new(
        config: Config,
        algorithms: Leaderboard<AlgorithmEntry>,
        models: Leaderboard<ModelEntry>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            algorithms: Arc::new(algorithms),
            models: Arc::new(models),
        }
    }

    pub fn results(&self) -> &ResultsConfig {
        &self.config.results
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("algorithms", &self.algorithms.len())
            .field("models", &self.models.len())
            .finish_non_exhaustive()
    }
}
