//! Display formatting for the string-based API contract.
//!
//! Quantities use 4 fraction digits, USD amounts and percentages use 2; the
//! integer part gets `,` thousands separators. Non-finite values fall back to
//! `f64`'s own Display ("inf", "-inf") inside the same templates, so an
//! infinite gain renders as `inf%`.

/// Formats `value` with `decimals` fraction digits and grouped thousands.
pub fn group_thousands(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let formatted = format!("{:.*}", decimals, value);
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (formatted.as_str(), None),
    };
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) => format!("{}{}.{}", sign, grouped, frac),
        None => format!("{}{}", sign, grouped),
    }
}

/// `1234.5 -> "$1,234.50"`
pub fn format_usd(value: f64) -> String {
    format!("${}", group_thousands(value, 2))
}

/// `1234.5 -> "1,234.5000"`
pub fn format_quantity(value: f64) -> String {
    group_thousands(value, 4)
}

/// `12.345 -> "12.35%"`; infinities render as `inf%` / `-inf%`.
pub fn format_percent(value: f64) -> String {
    format!("{}%", group_thousands(value, 2))
}

/// Display name: first letter uppercased, the remainder lowercased
/// ("bitcoin" -> "Bitcoin", "BTC" -> "Btc").
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
