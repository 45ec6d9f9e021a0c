//! Number formatting for display.

/// Whole number with thousands separators: `39538223` -> `39,538,223`.
pub fn format_count(value: u64) -> String {
    group_thousands(&value.to_string())
}

/// Currency with thousands separators and two decimals: `$1,234.50`.
pub fn format_currency(value: f64) -> String {
    let formatted = format!("{:.2}", value.abs());
    let (whole, frac) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));
    let sign = if value < 0.0 && formatted != "0.00" { "-" } else { "" };
    format!("{}${}.{}", sign, group_thousands(whole), frac)
}

/// Shortest round-trip form, always with a fractional part: `15` -> `15.0`.
pub fn format_decimal(value: f64) -> String {
    let formatted = value.to_string();
    if value.is_finite() && !formatted.contains(['.', 'e']) {
        format!("{}.0", formatted)
    } else {
        formatted
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
