use std::sync::Arc;

use crate::modules::RecommendationModule;

/// Application state shared by every request
///
/// Read-only after startup; cloning only bumps reference counts.
#[derive(Clone)]
pub struct AppState {
    pub recommendations: Arc<RecommendationModule>,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_module(RecommendationModule::new())
    }

    pub fn with_module(module: RecommendationModule) -> Self {
        Self {
            recommendations: Arc::new(module),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
