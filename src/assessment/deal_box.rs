use serde::Serialize;

use super::types::{AssessmentData, TimeCommitment};
use crate::deal::Industry;
use crate::money::{format_compact_currency, format_currency_range, format_percent};
use crate::scoring::ScoringConfig;

/// Share of SDE assumed to go to debt service
pub const DEBT_SERVICE_SHARE: f64 = 0.20;
/// Typical SDE margin on revenue for a small business
pub const SDE_MARGIN: f64 = 0.25;
/// Down payment never planned above this share of the deal
pub const MAX_DOWN_PAYMENT_SHARE: f64 = 0.20;

/// Profile of the businesses a buyer should be looking at.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DealBox {
    pub industry: Industry,
    pub target_sde: f64,
    pub sde_low: f64,
    pub sde_high: f64,
    pub revenue_low: f64,
    pub revenue_high: f64,
    pub deal_size_low: f64,
    pub deal_size_high: f64,
    pub down_payment_share: f64,
    pub down_payment_amount: f64,
    pub target_sde_label: String,
    pub sde_range_label: String,
    pub revenue_range_label: String,
    pub deal_size_label: String,
    pub down_payment_label: String,
    pub elevator_pitch: String,
}

/// Work backwards from the income the buyer wants to the size of business
/// that can pay it after debt service.
pub fn calculate_deal_box(data: &AssessmentData, config: &ScoringConfig) -> DealBox {
    let (income_low, income_high) = data.desired_income.bounds();
    let sde_share = 1.0 - DEBT_SERVICE_SHARE;

    let target_sde = data.desired_income.midpoint() / sde_share;
    let sde_low = income_low / sde_share;
    let sde_high = income_high / sde_share;

    let revenue_low = sde_low / SDE_MARGIN;
    let revenue_high = sde_high / SDE_MARGIN;

    let multiple = config.multiple_for(data.target_industry);
    let deal_size_low = target_sde * multiple.low;
    let deal_size_high = target_sde * multiple.high;
    let deal_size_mid = target_sde * multiple.midpoint();

    let down_payment_share = if deal_size_mid > 0.0 {
        (data.available_capital.midpoint() / deal_size_mid).min(MAX_DOWN_PAYMENT_SHARE)
    } else {
        0.0
    };
    let down_payment_amount = deal_size_mid * down_payment_share;

    let target_sde_label = format_compact_currency(target_sde);
    let sde_range_label = format_currency_range(sde_low, sde_high);
    let revenue_range_label = format_currency_range(revenue_low, revenue_high);
    let deal_size_label = format_currency_range(deal_size_low, deal_size_high);
    let down_payment_label = format!(
        "{} ({})",
        format_percent(down_payment_share),
        format_compact_currency(down_payment_amount)
    );

    log::debug!(
        "deal box: SDE {} on {} revenue, deals {}",
        sde_range_label,
        revenue_range_label,
        deal_size_label
    );

    let elevator_pitch = elevator_pitch(
        data,
        &revenue_range_label,
        &sde_range_label,
        &deal_size_label,
        &down_payment_label,
    );

    DealBox {
        industry: data.target_industry,
        target_sde,
        sde_low,
        sde_high,
        revenue_low,
        revenue_high,
        deal_size_low,
        deal_size_high,
        down_payment_share,
        down_payment_amount,
        target_sde_label,
        sde_range_label,
        revenue_range_label,
        deal_size_label,
        down_payment_label,
        elevator_pitch,
    }
}

fn elevator_pitch(
    data: &AssessmentData,
    revenue: &str,
    sde: &str,
    deal_size: &str,
    down_payment: &str,
) -> String {
    let target = industry_phrase(data.target_industry);
    let mut pitch = format!(
        "I'm looking to acquire {} with {} in annual revenue and {} in seller's discretionary earnings. \
         I'm targeting a purchase price of {}, with {} down and the balance financed through SBA and seller financing.",
        target, revenue, sde, deal_size, down_payment
    );

    if let Some(background) = data.professional_background.pitch_phrase() {
        pitch.push_str(&format!(" I bring a background in {}", background));
        match data.time_commitment {
            TimeCommitment::FullTime => pitch.push_str(" and plan to run the business full-time."),
            TimeCommitment::PartTime => pitch.push_str(" and plan to stay involved part-time alongside a strong manager."),
            _ => pitch.push('.'),
        }
    }

    pitch
}

/// "a technology business", "an e-commerce business", "an established business"
fn industry_phrase(industry: Industry) -> String {
    if industry == Industry::Other {
        return "an established business".to_string();
    }
    let name = industry.label().to_lowercase();
    let article = match name.chars().next() {
        Some('a' | 'e' | 'i' | 'o' | 'u') => "an",
        _ => "a",
    };
    format!("{} {} business", article, name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::types::{CapitalBand, IncomeBand, ProfessionalBackground};

    fn assert_close(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < 1e-6, "{} != {}", actual, expected);
    }

    fn assessment(income: IncomeBand, capital: CapitalBand, industry: Industry) -> AssessmentData {
        AssessmentData {
            desired_income: income,
            available_capital: capital,
            target_industry: industry,
            ..Default::default()
        }
    }

    #[test]
    fn test_sde_and_revenue_from_income() {
        let data = assessment(IncomeBand::From100kTo150k, CapitalBand::From100kTo250k, Industry::Other);
        let deal_box = calculate_deal_box(&data, &ScoringConfig::default());

        // 125k midpoint / 0.8
        assert_close(deal_box.target_sde, 156_250.0);
        assert_close(deal_box.sde_low, 125_000.0);
        assert_close(deal_box.sde_high, 187_500.0);
        assert_close(deal_box.revenue_low, 500_000.0);
        assert_close(deal_box.revenue_high, 750_000.0);
        assert_eq!(deal_box.sde_range_label, "$125K-$188K");
        assert_eq!(deal_box.revenue_range_label, "$500K-$750K");
        assert_eq!(deal_box.target_sde_label, "$156K");
    }

    #[test]
    fn test_deal_size_uses_industry_multiple() {
        let data = assessment(IncomeBand::From100kTo150k, CapitalBand::Over1m, Industry::Technology);
        let deal_box = calculate_deal_box(&data, &ScoringConfig::default());

        assert_close(deal_box.deal_size_low, 156_250.0 * 3.0);
        assert_close(deal_box.deal_size_high, 156_250.0 * 6.0);
    }

    #[test]
    fn test_down_payment_capped_at_twenty_percent() {
        let data = assessment(IncomeBand::From100kTo150k, CapitalBand::Over1m, Industry::Technology);
        let deal_box = calculate_deal_box(&data, &ScoringConfig::default());

        assert_eq!(deal_box.down_payment_share, MAX_DOWN_PAYMENT_SHARE);
        let deal_mid = (deal_box.deal_size_low + deal_box.deal_size_high) / 2.0;
        assert!((deal_box.down_payment_amount - deal_mid * 0.2).abs() < 1e-6);
        assert!(deal_box.down_payment_label.starts_with("20% ("));
    }

    #[test]
    fn test_down_payment_below_cap() {
        // 50k of capital against a ~430k deal is under 20%
        let data = assessment(IncomeBand::From100kTo150k, CapitalBand::Under100k, Industry::Other);
        let deal_box = calculate_deal_box(&data, &ScoringConfig::default());

        let deal_mid = 156_250.0 * 2.75;
        assert!((deal_box.down_payment_share - 50_000.0 / deal_mid).abs() < 1e-9);
        assert!(deal_box.down_payment_share < MAX_DOWN_PAYMENT_SHARE);
        assert!((deal_box.down_payment_amount - 50_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_elevator_pitch_mentions_labels() {
        let data = AssessmentData {
            professional_background: ProfessionalBackground::Operations,
            time_commitment: TimeCommitment::FullTime,
            ..assessment(IncomeBand::From150kTo250k, CapitalBand::From250kTo500k, Industry::HomeServices)
        };
        let deal_box = calculate_deal_box(&data, &ScoringConfig::default());

        assert!(deal_box.elevator_pitch.starts_with("I'm looking to acquire a home services business"));
        assert!(deal_box.elevator_pitch.contains(&deal_box.revenue_range_label));
        assert!(deal_box.elevator_pitch.contains(&deal_box.deal_size_label));
        assert!(deal_box.elevator_pitch.contains("background in operations"));
        assert!(deal_box.elevator_pitch.ends_with("full-time."));
    }

    #[test]
    fn test_elevator_pitch_without_background() {
        let data = assessment(IncomeBand::Unspecified, CapitalBand::Unspecified, Industry::Other);
        let deal_box = calculate_deal_box(&data, &ScoringConfig::default());
        assert!(deal_box.elevator_pitch.contains("an established business"));
        assert!(!deal_box.elevator_pitch.contains("background"));
    }

    #[test]
    fn test_industry_phrase_article() {
        assert_eq!(industry_phrase(Industry::Ecommerce), "an e-commerce business");
        assert_eq!(industry_phrase(Industry::Retail), "a retail business");
    }
}
