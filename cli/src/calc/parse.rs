use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Plain decimal number with optional sign, fraction and exponent.
    /// Examples: "250", "+1.5", ".5", "5.", "1e3", "2.5E-1"
    static ref NUMBER_PATTERN: Regex =
        Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?$").unwrap();
}

/// Parse numeric text, returning `None` for empty or non-numeric input
fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    if !NUMBER_PATTERN.is_match(trimmed) {
        log::trace!("rejected non-numeric input {:?}", text);
        return None;
    }

    // "1e400" matches the grammar but overflows
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse text as a strictly positive number.
///
/// Empty text, non-numeric text and values `<= 0` are absent.
pub fn parse_positive_number(text: &str) -> Option<f64> {
    parse_number(text).filter(|v| *v > 0.0)
}

/// Parse text as a non-negative number.
///
/// Empty text, non-numeric text and values `< 0` are absent. Zero is valid.
pub fn parse_non_negative_number(text: &str) -> Option<f64> {
    parse_number(text).filter(|v| *v >= 0.0)
}

/// Weight in grams; must be strictly positive
pub fn parse_weight(text: &str) -> Option<f64> {
    parse_positive_number(text)
}

/// Price; zero is accepted so free items can be compared
pub fn parse_price(text: &str) -> Option<f64> {
    parse_non_negative_number(text)
}
