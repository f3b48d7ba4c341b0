use super::types::DealInput;

/// Validate a deal file before scoring.
/// Returns all validation errors at once (not just the first).
pub fn validate_deal_input(input: &DealInput) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    let business = &input.business;
    let amounts = [
        ("business.years_in_business", business.years_in_business),
        ("business.annual_revenue", business.annual_revenue),
        ("business.owner_salary", business.owner_salary),
        ("business.asset_value", business.asset_value),
        ("business.purchase_price", business.purchase_price),
    ];
    for (field, value) in amounts {
        check_amount(&mut errors, field, value);
    }

    // EBITDA may legitimately be negative, but it has to be a real number
    if !business.ebitda.is_finite() {
        errors.push("business.ebitda: must be a finite number".to_string());
    }

    let involvement = input.involvement.owner_involvement;
    if !(1..=5).contains(&involvement) {
        errors.push(format!(
            "involvement.owner_involvement: must be between 1 and 5, got {}",
            involvement
        ));
    }

    if let Some(ref financing) = input.financing {
        let tranches = [
            ("financing.down_payment", financing.down_payment),
            ("financing.conventional_loan", financing.conventional_loan),
            ("financing.sba_7a", financing.sba_7a),
            ("financing.sba_504", financing.sba_504),
            ("financing.seller_note", financing.seller_note),
        ];
        for (field, value) in tranches {
            check_amount(&mut errors, field, value);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_amount(errors: &mut Vec<String>, field: &str, value: f64) {
    if !value.is_finite() {
        errors.push(format!("{}: must be a finite number", field));
    } else if value < 0.0 {
        errors.push(format!("{}: must be non-negative, got {}", field, value));
    }
}
