pub mod formatter;

pub use formatter::{
    format_deal_box, format_history, format_readiness, format_score, format_scorecard,
    should_use_colors,
};

use anyhow::{Context, Result};
use serde::Serialize;

/// Pretty-printed JSON for `--json` output
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize output as JSON")
}
