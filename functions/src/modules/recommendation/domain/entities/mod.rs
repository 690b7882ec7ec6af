// Recommendation Domain - Entities

mod recommendation;

pub use recommendation::*;
