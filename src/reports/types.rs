use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::assessment::{AssessmentData, DealBox, ReadinessResult};
use crate::deal::DealInput;
use crate::money::format_currency_range;
use crate::scoring::ScoreResult;

pub const REPORT_LOG_VERSION: u32 = 1;

/// Which calculation produced a saved report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    DealScore,
    Readiness,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedReport {
    pub kind: ReportKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub saved_at: DateTime<Utc>,
    /// Headline score (overall deal score or readiness score)
    pub score: u32,
    pub summary: String,
    /// Input and full result as submitted
    pub payload: serde_json::Value,
}

impl SavedReport {
    pub fn deal(input: &DealInput, result: &ScoreResult) -> Result<Self> {
        let payload = serde_json::json!({
            "input": serde_json::to_value(input).context("Failed to serialize deal input")?,
            "result": serde_json::to_value(result).context("Failed to serialize score result")?,
        });
        Ok(Self {
            kind: ReportKind::DealScore,
            name: input.name.clone(),
            saved_at: Utc::now(),
            score: result.overall_score,
            summary: format!(
                "{} valued {}, asking {}",
                result.industry,
                format_currency_range(result.valuation_low, result.valuation_high),
                crate::money::format_compact_currency(input.business.purchase_price)
            ),
            payload,
        })
    }

    pub fn assessment(
        data: &AssessmentData,
        readiness: &ReadinessResult,
        deal_box: &DealBox,
    ) -> Result<Self> {
        let payload = serde_json::json!({
            "input": serde_json::to_value(data).context("Failed to serialize assessment")?,
            "readiness": serde_json::to_value(readiness).context("Failed to serialize readiness")?,
            "deal_box": serde_json::to_value(deal_box).context("Failed to serialize deal box")?,
        });
        Ok(Self {
            kind: ReportKind::Readiness,
            name: data.name.clone(),
            saved_at: Utc::now(),
            score: readiness.score,
            summary: format!("{}, targeting {} deals", readiness.level, deal_box.deal_size_label),
            payload,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportLog {
    pub version: u32,
    #[serde(default)]
    pub reports: Vec<SavedReport>,
}

impl Default for ReportLog {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportLog {
    /// Create a new empty log with the current version
    pub fn new() -> Self {
        Self {
            version: REPORT_LOG_VERSION,
            reports: Vec::new(),
        }
    }

    pub fn push(&mut self, report: SavedReport) {
        self.reports.push(report);
    }

    /// Reports newest first
    pub fn newest_first(&self) -> Vec<&SavedReport> {
        let mut reports: Vec<&SavedReport> = self.reports.iter().collect();
        reports.sort_by(|a, b| b.saved_at.cmp(&a.saved_at));
        reports
    }
}
