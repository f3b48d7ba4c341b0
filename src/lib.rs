pub mod assessment;
pub mod config;
pub mod deal;
pub mod financing;
pub mod intake;
pub mod money;
pub mod output;
pub mod reports;
pub mod scoring;

pub use assessment::{calculate_deal_box, calculate_readiness_score, AssessmentData, DealBox, ReadinessResult};
pub use deal::{BusinessSnapshot, DealInput, FinancingStructure, OwnerInvolvementProfile};
pub use scoring::{calculate_scores, ScoreResult, ScoringConfig};
