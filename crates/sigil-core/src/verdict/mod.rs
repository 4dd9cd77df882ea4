pub mod classify;
pub mod extension;
pub mod model;
pub mod select;

pub use classify::derive_verdict;
pub use model::{InspectionVerdict, RiskLevel};
