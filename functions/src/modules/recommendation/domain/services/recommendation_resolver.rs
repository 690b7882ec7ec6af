use std::sync::Arc;

use super::super::entities::Recommendation;
use super::super::value_objects::{EmotionLabel, Intensity};
use crate::modules::recommendation::ports::RecommendationCatalog;

/// Recommendation resolver
///
/// Domain service: picks the category list for the label, the tier for the
/// intensity, and composes the reply. Pure; every input yields an answer.
#[derive(Clone)]
pub struct RecommendationResolver {
    catalog: Arc<dyn RecommendationCatalog>,
}

impl RecommendationResolver {
    pub fn new(catalog: Arc<dyn RecommendationCatalog>) -> Self {
        Self { catalog }
    }

    pub fn resolve(&self, label: &EmotionLabel, intensity: Intensity) -> Recommendation {
        let candidates = self.catalog.recommendations(label.category());
        let selected = candidates[intensity.tier().index()];
        Recommendation::compose(label, selected)
    }
}

impl std::fmt::Debug for RecommendationResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecommendationResolver").finish_non_exhaustive()
    }
}
