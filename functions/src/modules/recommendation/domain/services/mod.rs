// Recommendation Domain - Services

mod recommendation_resolver;

pub use recommendation_resolver::*;
