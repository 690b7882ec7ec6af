use crate::modules::recommendation::domain::EmotionCategory;

/// Three recommendations for one category, lowest intensity first
pub type RecommendationSet = [&'static str; 3];

/// Recommendation catalog port - read-only category lookup
///
/// Implementations must answer for every category and must not change their
/// answers over the lifetime of the process.
pub trait RecommendationCatalog: Send + Sync {
    /// Recommendations for a category, ordered low → high intensity
    fn recommendations(&self, category: EmotionCategory) -> RecommendationSet;
}
