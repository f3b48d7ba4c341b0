pub mod deal_box;
pub mod readiness;
mod types;

pub use deal_box::{calculate_deal_box, DealBox};
pub use readiness::{calculate_readiness_score, ReadinessComponent, ReadinessResult};
pub use types::{
    AssessmentData, BusinessExperience, CapitalBand, IncomeBand, Motivation,
    ProfessionalBackground, RiskTolerance, TimeCommitment,
};

use anyhow::Result;
use std::path::Path;

/// Load an assessment file (YAML, or JSON by extension)
pub fn load_assessment(path: &Path) -> Result<AssessmentData> {
    crate::deal::read_record(path)
}
