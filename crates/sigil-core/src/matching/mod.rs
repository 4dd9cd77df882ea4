pub mod eval;
pub mod model;

pub use eval::evaluate;
pub use model::{MatchAssessment, MatchReason};
