use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::scoring::ScoringConfig;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Save every score and assessment to the report log without `--save`
    #[serde(default)]
    pub save_reports: bool,

    /// Override the report log location (defaults to ~/.config/deal-scope/reports.json)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reports_path: Option<PathBuf>,

    #[serde(default)]
    pub scoring: Option<ScoringConfig>,
}
