use super::config::{MultipleRange, ScoringConfig};
use super::tiers::{score_for, RangeOp};
use crate::financing::{TrancheKind, MAX_TERM_YEARS};

/// Validate scoring configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_scoring(config: &ScoringConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Some(ref range) = config.default_multiple {
        check_multiple(&mut errors, "scoring.default_multiple", range);
    }

    if let Some(ref table) = config.industry_multiples {
        for (industry, range) in table {
            check_multiple(
                &mut errors,
                &format!("scoring.industry_multiples.{}", industry),
                range,
            );
        }
    }

    if let Some(step) = config.adjustment_step {
        if !step.is_finite() || step < 0.0 {
            errors.push("scoring.adjustment_step: must be non-negative".to_string());
        }
    }

    if let Some(ref financing) = config.financing {
        for kind in TrancheKind::ALL {
            let terms = financing.terms_for(kind);
            let field = serde_field(kind);
            if !terms.rate.is_finite() || terms.rate < 0.0 || terms.rate >= 1.0 {
                errors.push(format!(
                    "scoring.financing.{}.rate: must be a fraction in [0, 1), got {}",
                    field, terms.rate
                ));
            }
            if terms.years == 0 || terms.years > MAX_TERM_YEARS {
                errors.push(format!(
                    "scoring.financing.{}.years: must be between 1 and {}, got {}",
                    field, MAX_TERM_YEARS, terms.years
                ));
            }
        }
    }

    if let Some(ref tiers) = config.dscr_tiers {
        if tiers.is_empty() {
            errors.push("scoring.dscr_tiers: at least one tier is required".to_string());
        }

        let mut all_parse = true;
        for (i, tier) in tiers.iter().enumerate() {
            if let Err(e) = RangeOp::parse(&tier.range) {
                all_parse = false;
                errors.push(format!(
                    "scoring.dscr_tiers[{}].range: invalid '{}' - {}",
                    i, tier.range, e
                ));
            }
            if tier.score > 100 {
                errors.push(format!(
                    "scoring.dscr_tiers[{}].score: must be between 0 and 100, got {}",
                    i, tier.score
                ));
            }
        }

        // Better coverage must never score worse
        if all_parse && !tiers.is_empty() {
            let mut previous: Option<u32> = None;
            for step in 0..=400 {
                let dscr = step as f64 / 100.0;
                let score = score_for(dscr, tiers).map(|t| t.score).unwrap_or(0);
                if previous.is_some_and(|p| score < p) {
                    errors.push(format!(
                        "scoring.dscr_tiers: score drops to {} at DSCR {:.2}; tiers must not decrease as coverage improves",
                        score, dscr
                    ));
                    break;
                }
                previous = Some(score);
            }
        }
    }

    if let Some(threshold) = config.recommendation_threshold {
        if threshold > 100 {
            errors.push(format!(
                "scoring.recommendation_threshold: must be between 0 and 100, got {}",
                threshold
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_multiple(errors: &mut Vec<String>, field: &str, range: &MultipleRange) {
    if !(range.low.is_finite() && range.low > 0.0) {
        errors.push(format!("{}.low: must be positive", field));
    }
    if !(range.high.is_finite() && range.high > 0.0) {
        errors.push(format!("{}.high: must be positive", field));
    }
    if range.low > range.high {
        errors.push(format!(
            "{}: low ({}) must not exceed high ({})",
            field, range.low, range.high
        ));
    }
}

fn serde_field(kind: TrancheKind) -> &'static str {
    match kind {
        TrancheKind::Conventional => "conventional",
        TrancheKind::Sba7a => "sba_7a",
        TrancheKind::Sba504 => "sba_504",
        TrancheKind::SellerNote => "seller_note",
    }
}
