// Recommendation Module
//
// Hexagonal layout:
// - domain: value objects, the recommendation entity and the resolver service
// - ports: catalog interface the resolver reads through
// - infrastructure: the built-in static catalog
// - application: query handler behind the callable entry point

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use application::{
    GenerateRecommendationHandler, GenerateRecommendationQuery, GenerateRecommendationResponse,
    QueryHandler,
};
pub use domain::{
    EmotionCategory, EmotionLabel, Intensity, IntensityTier, Recommendation,
    RecommendationResolver, DEFAULT_INTENSITY,
};
pub use infrastructure::StaticRecommendationCatalog;
pub use ports::{RecommendationCatalog, RecommendationSet};

use std::sync::Arc;

/// Recommendation module container
///
/// Wires the catalog into the resolver and the query handler.
pub struct RecommendationModule {
    generate_handler: GenerateRecommendationHandler,
}

impl RecommendationModule {
    /// Create with the built-in catalog
    pub fn new() -> Self {
        Self::with_catalog(Arc::new(StaticRecommendationCatalog::new()))
    }

    /// Create with a custom catalog
    pub fn with_catalog(catalog: Arc<dyn RecommendationCatalog>) -> Self {
        let resolver = RecommendationResolver::new(catalog);
        Self {
            generate_handler: GenerateRecommendationHandler::new(resolver),
        }
    }

    pub async fn generate(&self, query: GenerateRecommendationQuery) -> Recommendation {
        self.generate_handler.handle(query).await.recommendation
    }
}

impl Default for RecommendationModule {
    fn default() -> Self {
        Self::new()
    }
}
