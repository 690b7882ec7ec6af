// Modules Layer
//
// Business modules in hexagonal layout:
// - recommendation: emotion + intensity → activity recommendation

pub mod recommendation;

pub use recommendation::RecommendationModule;
