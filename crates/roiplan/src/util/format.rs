/// Add thousands separators to a whole-dollar amount
fn group_thousands(dollars: i64) -> String {
    let dollars_str = dollars.to_string();
    let mut result = String::new();
    for (i, c) in dollars_str.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Format a currency value without cents (shorter format for tight columns)
pub fn format_currency_short(value: f64) -> String {
    let dollars = value.abs().round() as i64;

    if value >= 0.0 || dollars == 0 {
        format!("${}", group_thousands(dollars))
    } else {
        format!("-${}", group_thousands(dollars))
    }
}

/// Format a fraction as a percentage value
pub fn format_percentage(value: f64) -> String {
    format!("{:.0}%", value * 100.0)
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

/// ROI multiple, e.g. `2.00x`
pub fn format_multiple(value: f64) -> String {
    format!("{value:.2}x")
}

pub fn format_months(value: f64) -> String {
    format!("{value:.1} months")
}
