use async_trait::async_trait;
use serde_json::Value;

use super::super::QueryHandler;
use crate::modules::recommendation::domain::{
    EmotionLabel, Intensity, Recommendation, RecommendationResolver,
};

/// Generate a recommendation for an emotion and its intensity
#[derive(Debug, Clone)]
pub struct GenerateRecommendationQuery {
    pub emotion: EmotionLabel,
    pub intensity: Intensity,
}

impl GenerateRecommendationQuery {
    pub fn new(emotion: EmotionLabel, intensity: Intensity) -> Self {
        Self { emotion, intensity }
    }

    /// Build from the untyped request fields
    pub fn from_fields(emotion: Option<&Value>, intensity: Option<&Value>) -> Self {
        Self {
            emotion: EmotionLabel::from_value(emotion),
            intensity: Intensity::from_value(intensity),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GenerateRecommendationResponse {
    pub recommendation: Recommendation,
}

pub struct GenerateRecommendationHandler {
    resolver: RecommendationResolver,
}

impl GenerateRecommendationHandler {
    pub fn new(resolver: RecommendationResolver) -> Self {
        Self { resolver }
    }
}

#[async_trait]
impl QueryHandler<GenerateRecommendationQuery, GenerateRecommendationResponse>
    for GenerateRecommendationHandler
{
    async fn handle(&self, query: GenerateRecommendationQuery) -> GenerateRecommendationResponse {
        let tier = query.intensity.tier();
        let recommendation = self.resolver.resolve(&query.emotion, query.intensity);

        tracing::debug!(
            "[Recommendation] emotion={} category={} tier={:?} -> {}",
            query.emotion,
            query.emotion.category(),
            tier,
            recommendation.recommendation()
        );

        GenerateRecommendationResponse { recommendation }
    }
}
