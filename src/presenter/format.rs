//! Display formatting helpers

/// Group the digits of a non-negative integer string with commas
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format an integer count with thousands separators
pub fn format_count(count: u64) -> String {
    group_thousands(&count.to_string())
}

/// Format a USD amount the way the dashboard shows salaries.
///
/// Thousands are comma separated and at most three fraction digits are kept,
/// with trailing zeros dropped: `150000.0` → `$150,000`,
/// `1234.5` → `$1,234.5`, `99.12345` → `$99.123`.
pub fn format_usd(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("${}", amount);
    }

    let fixed = format!("{:.3}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let sign = if amount < 0.0 && (int_part != "0" || !frac_part.is_empty()) {
        "-"
    } else {
        ""
    };

    if frac_part.is_empty() {
        format!("{}${}", sign, group_thousands(int_part))
    } else {
        format!("{}${}.{}", sign, group_thousands(int_part), frac_part)
    }
}
