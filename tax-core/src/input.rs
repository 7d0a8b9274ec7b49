//! Sanitization of free-form numeric input.

use tracing::debug;

/// Normalizes input for integer parsing: trims whitespace and removes
/// thousands separators (`,`) and digit-group underscores.
fn normalize_integer_input(s: &str) -> String {
    s.trim().chars().filter(|c| !matches!(c, ',' | '_')).collect()
}

/// Parses free-form text into an integer, never failing.
///
/// Thousands separators and underscores are ignored and the leading
/// optionally-signed run of digits is taken, so `"12.9"` parses as `12`.
/// Text with no leading digits, or a value that does not fit in an `i64`,
/// yields `default`.
///
/// # Examples
///
/// ```
/// use tax_core::sanitize;
///
/// assert_eq!(sanitize("3,000,000", 0), 3_000_000);
/// assert_eq!(sanitize("1_500", 0), 1_500);
/// assert_eq!(sanitize("abc", 0), 0);
/// assert_eq!(sanitize("", 5), 5);
/// ```
pub fn sanitize(
    text: &str,
    default: i64,
) -> i64 {
    let normalized = normalize_integer_input(text);

    let sign_len = usize::from(normalized.starts_with(['+', '-']));
    let digits_len = normalized[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();

    if digits_len == 0 {
        if !normalized.is_empty() {
            debug!(input = %text, default, "no digits in numeric input, using default");
        }
        return default;
    }

    normalized[..sign_len + digits_len]
        .parse()
        .unwrap_or_else(|e| {
            debug!(input = %text, default, "numeric input out of range: {}", e);
            default
        })
}
