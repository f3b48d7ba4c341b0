use crate::deal::{Answer, OwnerInvolvementProfile, SopStatus};

pub const MAX_RECOMMENDATIONS: usize = 3;

pub const PRICE_ABOVE_VALUE: &str = "The asking price sits above the estimated valuation range. Negotiate the price down or shift more of it into a seller note or earnout.";
pub const OWNER_DEPENDENT: &str = "The business leans heavily on its owner. Negotiate an extended transition period and get key customer and vendor relationships introduced before closing.";
pub const THIN_CASH_FLOW: &str = "Projected cash flow leaves little cushion over debt service. Increase the down payment, lengthen the seller note, or lower the price.";
pub const UNVERIFIED_FINANCIALS: &str = "Request three years of tax returns and a quality of earnings review to verify the reported numbers.";
pub const UNDOCUMENTED_PROCESSES: &str = "Ask the seller to document standard operating procedures as part of the transition plan.";
pub const LOOKS_STRONG: &str = "This deal scores well across the board. Move ahead with a letter of intent and full due diligence.";

/// Build the ordered recommendation list for a scored deal.
///
/// Rules are checked in a fixed order and the list is cut to
/// `MAX_RECOMMENDATIONS`. When no rule fires a single positive note is returned.
pub fn build_recommendations(
    price_to_value_score: u32,
    owner_dependence_score: u32,
    cash_flow_score: Option<u32>,
    involvement: &OwnerInvolvementProfile,
    threshold: u32,
) -> Vec<String> {
    let rules = [
        (price_to_value_score < threshold, PRICE_ABOVE_VALUE),
        (owner_dependence_score < threshold, OWNER_DEPENDENT),
        (
            cash_flow_score.is_some_and(|score| score < threshold),
            THIN_CASH_FLOW,
        ),
        (involvement.financial_records != Answer::Yes, UNVERIFIED_FINANCIALS),
        (involvement.sops != SopStatus::WellDocumented, UNDOCUMENTED_PROCESSES),
    ];

    let mut recommendations: Vec<String> = rules
        .iter()
        .filter(|(fired, _)| *fired)
        .map(|(_, text)| text.to_string())
        .take(MAX_RECOMMENDATIONS)
        .collect();

    if recommendations.is_empty() {
        recommendations.push(LOOKS_STRONG.to_string());
    }
    recommendations
}
