// Recommendation Domain Layer
// Value objects, the result entity and the resolver service

pub mod entities;
pub mod services;
pub mod value_objects;

pub use entities::Recommendation;
pub use services::RecommendationResolver;
pub use value_objects::{EmotionCategory, EmotionLabel, Intensity, IntensityTier, DEFAULT_INTENSITY};
