// Recommendation Ports
// Abstract interfaces the domain reads through

mod recommendation_catalog;

pub use recommendation_catalog::*;
