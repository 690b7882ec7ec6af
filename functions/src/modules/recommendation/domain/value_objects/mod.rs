// Recommendation Domain - Value Objects
// Immutable, compared by value

mod emotion;
mod intensity;
mod text_form;

pub use emotion::*;
pub use intensity::*;
