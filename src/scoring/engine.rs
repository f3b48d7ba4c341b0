use serde::Serialize;

use super::config::{MultipleRange, ScoringConfig, MIN_HIGH_MULTIPLE, MIN_LOW_MULTIPLE};
use super::recommendations::build_recommendations;
use super::tiers::score_for;
use crate::deal::{Answer, DealInput, Industry, OwnerInvolvementProfile, SopStatus};
use crate::financing::{debt_service, DebtService};

/// Points for owner involvement levels 1 through 5
const INVOLVEMENT_POINTS: [u32; 5] = [40, 30, 20, 10, 0];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MultipleAdjustment {
    pub label: String,
    pub delta: f64,
    pub before: MultipleRange,
    pub after: MultipleRange,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    pub industry: Industry,
    pub adjusted_ebitda: f64,
    pub base_multiple: MultipleRange,
    pub multiple_low: f64,
    pub multiple_high: f64,
    pub valuation_low: f64,
    pub valuation_high: f64,
    pub price_to_value_score: u32,
    pub owner_dependence_score: u32,
    pub cash_flow_score: Option<u32>,
    pub dscr: Option<f64>,
    pub monthly_debt_payment: Option<f64>,
    pub monthly_income_after_debt: Option<f64>,
    pub annual_income_after_debt: Option<f64>,
    pub overall_score: u32,
    pub recommendations: Vec<String>,
    pub adjustments: Vec<MultipleAdjustment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debt_service: Option<DebtService>,
}

/// Score a deal: valuation range, price, owner dependence and, when the deal
/// is financed, debt service coverage.
///
/// Never fails. Degenerate input (zero earnings, nothing borrowed) produces
/// degenerate scores rather than errors.
pub fn calculate_scores(input: &DealInput, config: &ScoringConfig) -> ScoreResult {
    let business = &input.business;
    let involvement = &input.involvement;

    let adjusted_ebitda = business.ebitda + business.owner_salary;

    let base_multiple = config.multiple_for(business.industry);
    let (multiple, adjustments) =
        adjust_multiple(base_multiple, involvement, config.adjustment_step());

    let valuation_low = adjusted_ebitda * multiple.low + business.asset_value;
    let valuation_high = adjusted_ebitda * multiple.high + business.asset_value;

    let price_to_value_score =
        price_to_value_score(business.purchase_price, valuation_low, valuation_high);
    let owner_dependence_score = owner_dependence_score(involvement);

    let debt = input
        .financing
        .as_ref()
        .and_then(|financing| debt_service(financing, &config.financing_terms()))
        .filter(|debt| debt.monthly_total > 0.0);

    let monthly_income = adjusted_ebitda / 12.0;
    let tiers = config.dscr_tiers();
    let (cash_flow_score, dscr, monthly_debt_payment, monthly_income_after_debt) = match debt {
        Some(ref debt) => {
            let dscr = monthly_income / debt.monthly_total;
            let score = score_for(dscr, &tiers).map(|tier| tier.score).unwrap_or(0);
            log::debug!(
                "DSCR {:.2} on {:.0}/month of debt service -> cash flow score {}",
                dscr,
                debt.monthly_total,
                score
            );
            (
                Some(score),
                Some(dscr),
                Some(debt.monthly_total),
                Some(monthly_income - debt.monthly_total),
            )
        }
        None => (None, None, None, None),
    };

    let overall_score = overall_score(&[
        Some(price_to_value_score),
        Some(owner_dependence_score),
        cash_flow_score,
    ]);

    let recommendations = build_recommendations(
        price_to_value_score,
        owner_dependence_score,
        cash_flow_score,
        involvement,
        config.recommendation_threshold(),
    );

    ScoreResult {
        industry: business.industry,
        adjusted_ebitda,
        base_multiple,
        multiple_low: multiple.low,
        multiple_high: multiple.high,
        valuation_low,
        valuation_high,
        price_to_value_score,
        owner_dependence_score,
        cash_flow_score,
        dscr,
        monthly_debt_payment,
        monthly_income_after_debt,
        annual_income_after_debt: monthly_income_after_debt.map(|monthly| monthly * 12.0),
        overall_score,
        recommendations,
        adjustments,
        debt_service: debt,
    }
}

/// Apply the owner-involvement and documentation adjustments to the industry
/// multiple, then clamp to the floors.
pub fn adjust_multiple(
    base: MultipleRange,
    involvement: &OwnerInvolvementProfile,
    step: f64,
) -> (MultipleRange, Vec<MultipleAdjustment>) {
    let level = involvement.owner_involvement;
    let rules = [
        (
            level < 3 && involvement.runs_without_owner == Answer::Yes,
            "Runs without the owner",
            step,
        ),
        (
            involvement.sops == SopStatus::WellDocumented,
            "Well-documented SOPs",
            step,
        ),
        (
            involvement.financial_records == Answer::Somewhat || level >= 3,
            "Owner-heavy or partially verified",
            -step,
        ),
        (
            involvement.sops == SopStatus::NotDocumented,
            "Undocumented SOPs",
            -step,
        ),
    ];

    let mut multiple = base;
    let mut adjustments = Vec::new();
    for (applies, label, delta) in rules {
        if !applies {
            continue;
        }
        let before = multiple;
        multiple = MultipleRange::new(multiple.low + delta, multiple.high + delta);
        log::debug!("{}: multiple {:+} -> {:.1}x-{:.1}x", label, delta, multiple.low, multiple.high);
        adjustments.push(MultipleAdjustment {
            label: label.to_string(),
            delta,
            before,
            after: multiple,
        });
    }

    let clamped = MultipleRange::new(
        multiple.low.max(MIN_LOW_MULTIPLE),
        multiple.high.max(MIN_HIGH_MULTIPLE),
    );
    (clamped, adjustments)
}

/// 100 at or below the low valuation, 80 within the range, then 10 points
/// off 75 for every full 10% over the high valuation.
pub fn price_to_value_score(price: f64, valuation_low: f64, valuation_high: f64) -> u32 {
    if price <= valuation_low {
        100
    } else if price <= valuation_high {
        80
    } else if valuation_high <= 0.0 {
        0
    } else {
        let overvaluation = (price - valuation_high) / valuation_high;
        let penalty = (overvaluation * 10.0).floor() * 10.0;
        (75.0 - penalty).max(0.0) as u32
    }
}

/// Additive owner-dependence score, higher means less dependent.
pub fn owner_dependence_score(involvement: &OwnerInvolvementProfile) -> u32 {
    let index = (involvement.owner_involvement.clamp(1, 5) - 1) as usize;
    let mut score = INVOLVEMENT_POINTS[index];

    score += match involvement.runs_without_owner {
        Answer::Yes => 15,
        Answer::Somewhat => 10,
        Answer::No => 0,
    };
    if involvement.has_second_in_command == Answer::Yes {
        score += 15;
    }
    score += match involvement.financial_records {
        Answer::Yes => 15,
        Answer::Somewhat => 5,
        Answer::No => 0,
    };
    if involvement.sops == SopStatus::WellDocumented {
        score += 15;
    }

    score.min(100)
}

/// Rounded mean of the sub-scores that are present
pub fn overall_score(scores: &[Option<u32>]) -> u32 {
    let defined: Vec<u32> = scores.iter().flatten().copied().collect();
    if defined.is_empty() {
        return 0;
    }
    let total: u32 = defined.iter().sum();
    (total as f64 / defined.len() as f64).round() as u32
}
