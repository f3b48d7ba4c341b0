use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::tiers::ScoreTier;
use crate::deal::Industry;
use crate::financing::FinancingTerms;

/// Valuation multiple range applied to adjusted EBITDA.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MultipleRange {
    pub low: f64,
    pub high: f64,
}

impl MultipleRange {
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    pub fn midpoint(&self) -> f64 {
        (self.low + self.high) / 2.0
    }
}

/// Built-in multiple range for an industry. `Other` gets the default range.
pub fn standard_multiple(industry: Industry) -> MultipleRange {
    match industry {
        Industry::Technology => MultipleRange::new(3.0, 6.0),
        Industry::Healthcare => MultipleRange::new(3.0, 5.0),
        Industry::Manufacturing => MultipleRange::new(3.0, 5.0),
        Industry::Ecommerce => MultipleRange::new(2.5, 4.5),
        Industry::ProfessionalServices => MultipleRange::new(2.5, 4.5),
        Industry::Distribution => MultipleRange::new(2.5, 4.0),
        Industry::HomeServices => MultipleRange::new(2.5, 4.0),
        Industry::Transportation => MultipleRange::new(2.0, 3.5),
        Industry::Construction => MultipleRange::new(2.0, 3.5),
        Industry::Retail => MultipleRange::new(1.5, 3.0),
        Industry::Restaurant => MultipleRange::new(1.5, 2.5),
        Industry::Other => DEFAULT_MULTIPLE,
    }
}

pub const DEFAULT_MULTIPLE: MultipleRange = MultipleRange::new(2.0, 3.5);

/// Floors applied to the adjusted multiples
pub const MIN_LOW_MULTIPLE: f64 = 1.0;
pub const MIN_HIGH_MULTIPLE: f64 = 1.5;

/// Scoring configuration.
///
/// Every field is optional; anything left out falls back to the built-in
/// tables. Example YAML:
/// ```yaml
/// scoring:
///   default_multiple: { low: 2.0, high: 3.5 }
///   industry_multiples:
///     Technology: { low: 3.5, high: 6.5 }
///   financing:
///     seller_note: { rate: 0.08, years: 5 }
///   dscr_tiers:
///     - { range: "<1.0", score: 0 }
///     - { range: ">=1.0", score: 100 }
///   recommendation_threshold: 70
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    /// Multiple range for industries without an entry in the table
    #[serde(default)]
    pub default_multiple: Option<MultipleRange>,

    /// Per-industry overrides of the built-in multiple table
    #[serde(default)]
    pub industry_multiples: Option<BTreeMap<Industry, MultipleRange>>,

    /// Size of each multiple adjustment (default: 0.5)
    #[serde(default)]
    pub adjustment_step: Option<f64>,

    /// Rate/term pairs per loan tranche
    #[serde(default)]
    pub financing: Option<FinancingTerms>,

    /// DSCR tiers, first match wins
    #[serde(default)]
    pub dscr_tiers: Option<Vec<ScoreTier>>,

    /// Sub-scores below this trigger a recommendation (default: 70)
    #[serde(default)]
    pub recommendation_threshold: Option<u32>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            default_multiple: Some(DEFAULT_MULTIPLE),
            industry_multiples: None,
            adjustment_step: Some(0.5),
            financing: Some(FinancingTerms::default()),
            dscr_tiers: Some(default_dscr_tiers()),
            recommendation_threshold: Some(70),
        }
    }
}

pub fn default_dscr_tiers() -> Vec<ScoreTier> {
    vec![
        ScoreTier::new("<1.0", 0),
        ScoreTier::new("<1.25", 50),
        ScoreTier::new("<1.5", 80),
        ScoreTier::new(">=1.5", 100),
    ]
}

impl ScoringConfig {
    /// Multiple range for `industry`: config override, then built-in table,
    /// then the configured default for `Other`.
    pub fn multiple_for(&self, industry: Industry) -> MultipleRange {
        if let Some(range) = self
            .industry_multiples
            .as_ref()
            .and_then(|table| table.get(&industry))
        {
            return *range;
        }
        match industry {
            Industry::Other => self.default_multiple.unwrap_or(DEFAULT_MULTIPLE),
            known => standard_multiple(known),
        }
    }

    pub fn adjustment_step(&self) -> f64 {
        self.adjustment_step.unwrap_or(0.5)
    }

    pub fn financing_terms(&self) -> FinancingTerms {
        self.financing.clone().unwrap_or_default()
    }

    pub fn dscr_tiers(&self) -> Vec<ScoreTier> {
        self.dscr_tiers.clone().unwrap_or_else(default_dscr_tiers)
    }

    pub fn recommendation_threshold(&self) -> u32 {
        self.recommendation_threshold.unwrap_or(70)
    }
}
