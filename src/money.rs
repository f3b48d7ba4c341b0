/// Format a dollar amount in compact notation ($850, $250K, $1.2M)
pub fn format_compact_currency(amount: f64) -> String {
    let value = amount.abs();

    // Branch on the rounded value so 999.6 reads $1K and 999,600 reads $1M
    let formatted = if value >= 999_500.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if value >= 999.5 {
        format!("{:.0}K", (value / 1_000.0).round())
    } else {
        format!("{:.0}", value)
    };

    // Nothing left to sign once it rounds to $0
    let sign = if amount < 0.0 && formatted != "0" { "-" } else { "" };

    // Trim trailing .0 (e.g., "2.0M" -> "2M")
    let trimmed = formatted.replace(".0M", "M");
    format!("{}${}", sign, trimmed)
}

/// Format a range as "$250K-$400K"
pub fn format_currency_range(low: f64, high: f64) -> String {
    format!(
        "{}-{}",
        format_compact_currency(low),
        format_compact_currency(high)
    )
}

/// Format a whole-dollar amount with thousands separators ($1,234,567)
pub fn format_currency(amount: f64) -> String {
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("{}${}", sign, grouped)
}

/// Format a fraction as a whole percentage (0.2 -> "20%")
pub fn format_percent(fraction: f64) -> String {
    format!("{:.0}%", fraction * 100.0)
}
