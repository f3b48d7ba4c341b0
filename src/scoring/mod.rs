pub mod config;
pub mod engine;
pub mod recommendations;
pub mod tiers;
pub mod validation;

pub use config::*;
pub use engine::{calculate_scores, MultipleAdjustment, ScoreResult};
pub use tiers::{RangeOp, ScoreTier};
pub use validation::validate_scoring;
