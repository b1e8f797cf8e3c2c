/// Insert thousands separators into a non-negative whole number
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Format a currency value with cents, e.g. `-$7,869.00`. Half cents round
/// to even, as in the CSV export.
pub fn format_currency(value: f64) -> String {
    let total_cents = (value.abs() * 100.0).round_ties_even() as u64;
    let dollars = group_thousands(total_cents / 100);
    let cents = total_cents % 100;

    if value < 0.0 && total_cents > 0 {
        format!("-${}.{:02}", dollars, cents)
    } else {
        format!("${}.{:02}", dollars, cents)
    }
}

/// Format a currency value in compact form (e.g., $2.1M, $450K, $50)
pub fn format_compact_currency(value: f64) -> String {
    let abs_value = value.abs();
    let sign = if value < 0.0 { "-" } else { "" };

    if abs_value >= 1_000_000.0 {
        format!("{}${:.1}M", sign, abs_value / 1_000_000.0)
    } else if abs_value >= 1_000.0 {
        format!("{}${:.0}K", sign, abs_value / 1_000.0)
    } else {
        format!("{}${:.0}", sign, abs_value)
    }
}

/// Format a unit count with thousands separators
pub fn format_units(value: i64) -> String {
    let grouped = group_thousands(value.unsigned_abs());
    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Format a whole percentage point with an explicit sign, e.g. `+5%`
pub fn format_signed_pct(pct: i32) -> String {
    if pct > 0 {
        format!("+{}%", pct)
    } else {
        format!("{}%", pct)
    }
}

/// Format a fractional change as a signed percentage, e.g. `-13.00%`
pub fn format_change_ratio(ratio: f64) -> String {
    let pct = ratio * 100.0;
    if pct > 0.0 {
        format!("+{:.2}%", pct)
    } else {
        format!("{:.2}%", pct + 0.0)
    }
}
