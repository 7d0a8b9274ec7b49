use rust_decimal::Decimal;
use tax_core::calculations::common::round_to_yen;
use tax_core::sanitize;
use tracing::debug;

/// Formats a yen amount as `¥1,234,567`, rounded to whole yen.
pub fn format_yen(amount: Decimal) -> String {
    let rounded = round_to_yen(amount);
    let digits = rounded.abs().trunc().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("¥-{grouped}")
    } else {
        format!("¥{grouped}")
    }
}

/// Formats a rate as a percentage, e.g. `0.021` → `2.1%`.
pub fn format_rate(rate: Decimal) -> String {
    format!("{}%", (rate * Decimal::ONE_HUNDRED).normalize())
}

/// Sanitizes text into a non-negative yen amount.
pub fn parse_amount(text: &str) -> Decimal {
    let value = sanitize(text, 0);
    if value < 0 {
        debug!(input = %text, "negative amount treated as zero");
    }
    Decimal::from(value.max(0))
}

/// Sanitizes text into a non-negative head count.
pub fn parse_count(text: &str) -> u32 {
    let value = sanitize(text, 0);
    u32::try_from(value.max(0)).unwrap_or(u32::MAX)
}
