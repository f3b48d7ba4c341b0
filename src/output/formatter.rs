use std::io::IsTerminal;

use owo_colors::OwoColorize;
use terminal_size::{terminal_size, Width};

use crate::assessment::{DealBox, ReadinessResult};
use crate::deal::DealInput;
use crate::money::{format_compact_currency, format_currency, format_currency_range};
use crate::reports::{ReportKind, SavedReport};
use crate::scoring::ScoreResult;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Render a 0-100 score as "82/100", colored by band when enabled
pub fn format_score(score: u32, use_colors: bool) -> String {
    let text = format!("{:>3}/100", score);
    if !use_colors {
        return text;
    }
    if score >= 80 {
        text.green().bold().to_string()
    } else if score >= 60 {
        text.yellow().bold().to_string()
    } else {
        text.red().bold().to_string()
    }
}

fn heading(text: &str, use_colors: bool) -> String {
    if use_colors {
        text.bold().underline().to_string()
    } else {
        text.to_string()
    }
}

/// Format a scored deal as a multi-line scorecard
pub fn format_scorecard(deal: &DealInput, result: &ScoreResult, use_colors: bool) -> String {
    let mut lines = Vec::new();

    let title = match deal.name {
        Some(ref name) => format!("{} ({})", name, result.industry),
        None => format!("{} business", result.industry),
    };
    lines.push(heading(&title, use_colors));
    lines.push(String::new());

    lines.push(format!(
        "  Adjusted EBITDA:   {}",
        format_currency(result.adjusted_ebitda)
    ));
    lines.push(format!(
        "  Multiple:          {:.1}x-{:.1}x (industry {:.1}x-{:.1}x)",
        result.multiple_low, result.multiple_high, result.base_multiple.low, result.base_multiple.high
    ));
    for adjustment in &result.adjustments {
        lines.push(format!("    {:+.1}x  {}", adjustment.delta, adjustment.label));
    }
    lines.push(format!(
        "  Valuation:         {}",
        format_currency_range(result.valuation_low, result.valuation_high)
    ));
    lines.push(format!(
        "  Asking price:      {}",
        format_compact_currency(deal.business.purchase_price)
    ));

    if let Some(ref financing) = deal.financing {
        lines.push(String::new());
        lines.push(format!(
            "  Total funding:     {}",
            format_currency(financing.total())
        ));
    }
    if let Some(ref debt) = result.debt_service {
        for tranche in &debt.tranches {
            lines.push(format!(
                "  {:<18} {} -> {}/mo",
                format!("{}:", tranche.kind),
                format_currency(tranche.principal),
                format_currency(tranche.monthly_payment)
            ));
        }
    }
    if let (Some(debt), Some(dscr), Some(after), Some(annual)) = (
        result.debt_service.as_ref(),
        result.dscr,
        result.monthly_income_after_debt,
        result.annual_income_after_debt,
    ) {
        lines.push(format!(
            "  Debt service:      {}/mo ({}/yr)",
            format_currency(debt.monthly_total),
            format_currency(debt.annual_total())
        ));
        lines.push(format!("  DSCR:              {:.2}x", dscr));
        lines.push(format!(
            "  After debt:        {}/mo ({}/yr)",
            format_currency(after),
            format_currency(annual)
        ));
    }

    lines.push(String::new());
    lines.push(format!(
        "  Price to value:    {}",
        format_score(result.price_to_value_score, use_colors)
    ));
    lines.push(format!(
        "  Owner dependence:  {}",
        format_score(result.owner_dependence_score, use_colors)
    ));
    match result.cash_flow_score {
        Some(score) => lines.push(format!("  Cash flow:         {}", format_score(score, use_colors))),
        None => lines.push("  Cash flow:             - (no financing given)".to_string()),
    }
    lines.push(format!(
        "  Overall:           {}",
        format_score(result.overall_score, use_colors)
    ));

    lines.push(String::new());
    lines.push(heading("Recommendations", use_colors));
    for (i, rec) in result.recommendations.iter().enumerate() {
        lines.push(format!("  {}. {}", i + 1, rec));
    }

    lines.join("\n")
}

/// Format a readiness result with its component breakdown
pub fn format_readiness(result: &ReadinessResult, use_colors: bool) -> String {
    let mut lines = Vec::new();
    let level = if use_colors {
        result.level.bold().to_string()
    } else {
        result.level.clone()
    };
    lines.push(format!("{}  {}", level, format_score(result.score, use_colors)));
    lines.push(format!("  {}", result.description));
    lines.push(String::new());
    for component in &result.components {
        lines.push(format!("  {:<25} {:>2}", component.label, component.points));
    }
    lines.join("\n")
}

/// Format a deal box and its elevator pitch
pub fn format_deal_box(deal_box: &DealBox, use_colors: bool) -> String {
    let lines = [
        heading("Your deal box", use_colors),
        format!("  Industry:       {}", deal_box.industry),
        format!("  Target SDE:     {}", deal_box.target_sde_label),
        format!("  SDE range:      {}", deal_box.sde_range_label),
        format!("  Revenue range:  {}", deal_box.revenue_range_label),
        format!("  Deal size:      {}", deal_box.deal_size_label),
        format!("  Down payment:   {}", deal_box.down_payment_label),
        String::new(),
        heading("Elevator pitch", use_colors),
        format!("  {}", deal_box.elevator_pitch),
    ];
    lines.join("\n")
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate text to fit available width, accounting for Unicode
fn truncate(text: &str, max_width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_width {
        text.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Format saved reports as a table: index, date, kind, score, summary
pub fn format_history(reports: &[&SavedReport], use_colors: bool) -> String {
    if reports.is_empty() {
        return "No saved reports.".to_string();
    }

    let term_width = get_terminal_width();

    // " 1." + date (16) + kind (9) + score (7) + separators
    let fixed_width = 4 + 16 + 2 + 9 + 2 + 7 + 2;

    reports
        .iter()
        .enumerate()
        .map(|(idx, report)| {
            let index_str = format!("{:>2}.", idx + 1);
            let date = report.saved_at.format("%Y-%m-%d %H:%M").to_string();
            let kind = match report.kind {
                ReportKind::DealScore => "deal",
                ReportKind::Readiness => "readiness",
            };
            let summary = match report.name {
                Some(ref name) => format!("{}: {}", name, report.summary),
                None => report.summary.clone(),
            };
            let summary = match term_width {
                Some(width) if width > fixed_width + 10 => truncate(&summary, width - fixed_width),
                Some(_) => truncate(&summary, 20),
                None => summary,
            };

            if use_colors {
                format!(
                    "{} {}  {:<9}  {}  {}",
                    index_str.dimmed(),
                    date,
                    kind.cyan(),
                    format_score(report.score, true),
                    summary
                )
            } else {
                format!(
                    "{} {}  {:<9}  {}  {}",
                    index_str,
                    date,
                    kind,
                    format_score(report.score, false),
                    summary
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::{calculate_deal_box, calculate_readiness_score, AssessmentData};
    use crate::deal::{BusinessSnapshot, FinancingStructure, Industry};
    use crate::scoring::{calculate_scores, ScoringConfig};

    fn sample_deal() -> DealInput {
        DealInput {
            name: Some("Acme Software".to_string()),
            business: BusinessSnapshot {
                industry: Industry::Technology,
                ebitda: 200_000.0,
                purchase_price: 800_000.0,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_format_score_plain() {
        assert_eq!(format_score(80, false), " 80/100");
        assert_eq!(format_score(100, false), "100/100");
        assert_eq!(format_score(5, false), "  5/100");
    }

    #[test]
    fn test_scorecard_without_financing() {
        let deal = sample_deal();
        let result = calculate_scores(&deal, &ScoringConfig::default());
        let output = format_scorecard(&deal, &result, false);

        assert!(output.starts_with("Acme Software (Technology)"));
        assert!(output.contains("Adjusted EBITDA:   $200,000"));
        assert!(output.contains("Asking price:      $800K"));
        assert!(output.contains("no financing given"));
        assert!(output.contains("Recommendations"));
        assert!(!output.contains("DSCR"));
    }

    #[test]
    fn test_scorecard_with_financing() {
        let mut deal = sample_deal();
        deal.financing = Some(FinancingStructure {
            down_payment: 100_000.0,
            sba_7a: 700_000.0,
            ..Default::default()
        });
        let result = calculate_scores(&deal, &ScoringConfig::default());
        let output = format_scorecard(&deal, &result, false);

        assert!(output.contains("Total funding:     $800,000"));
        assert!(output.contains("SBA 7(a):"));
        let debt = result.debt_service.as_ref().unwrap();
        assert!(output.contains(&format!(
            "Debt service:      {}/mo ({}/yr)",
            format_currency(debt.monthly_total),
            format_currency(debt.monthly_total * 12.0)
        )));
        assert!(output.contains("DSCR:              1.80x"));
        assert!(output.contains("/yr)"));
    }

    #[test]
    fn test_scorecard_lists_adjustments() {
        let mut deal = sample_deal();
        deal.involvement.owner_involvement = 4;
        let result = calculate_scores(&deal, &ScoringConfig::default());
        let output = format_scorecard(&deal, &result, false);
        assert!(output.contains("-0.5x  Owner-heavy or partially verified"));
    }

    #[test]
    fn test_format_readiness() {
        let result = calculate_readiness_score(&AssessmentData::default());
        let output = format_readiness(&result, false);
        assert!(output.starts_with("Not Ready Yet"));
        assert!(output.contains("Available capital"));
    }

    #[test]
    fn test_format_deal_box() {
        let deal_box = calculate_deal_box(&AssessmentData::default(), &ScoringConfig::default());
        let output = format_deal_box(&deal_box, false);
        assert!(output.contains("Target SDE:     $156K"));
        assert!(output.contains("Elevator pitch"));
    }

    #[test]
    fn test_format_history_empty() {
        assert_eq!(format_history(&[], false), "No saved reports.");
    }

    #[test]
    fn test_format_history_rows() {
        let deal = sample_deal();
        let result = calculate_scores(&deal, &ScoringConfig::default());
        let report = SavedReport::deal(&deal, &result).unwrap();
        let output = format_history(&[&report, &report], false);

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with(" 1."));
        assert!(lines[1].starts_with(" 2."));
        assert!(lines[0].contains("deal"));
    }

    #[test]
    fn test_truncate_long() {
        assert_eq!(truncate("This is a very long summary", 15), "This is a ve...");
    }

    #[test]
    fn test_truncate_short() {
        assert_eq!(truncate("Short", 20), "Short");
    }

    #[test]
    fn test_truncate_very_narrow() {
        assert_eq!(truncate("Hello world", 3), "Hel");
    }
}
