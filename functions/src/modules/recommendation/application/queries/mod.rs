// Recommendation Queries

mod generate_recommendation;

pub use generate_recommendation::*;
