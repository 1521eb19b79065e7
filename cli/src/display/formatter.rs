use super::locale::Locale;
use crate::calc::{ComparisonResult, Verdict};
use crate::config::Config;

/// Shown wherever a unit price is absent
pub const PLACEHOLDER: &str = "--";

/// Renders comparison results as localized text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportFormatter {
    locale: Locale,
    max_fraction_digits: usize,
}

impl ReportFormatter {
    pub fn new(locale: Locale, max_fraction_digits: usize) -> Self {
        Self {
            locale,
            max_fraction_digits,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.locale, config.format.max_fraction_digits)
    }

    pub fn with_locale(self, locale: Locale) -> Self {
        Self { locale, ..self }
    }

    /// Round to at most `max_fraction_digits`, trim trailing zeros, group thousands
    pub fn format_number(&self, value: f64) -> String {
        // Avoid printing "-0"
        let value = if value == 0.0 { 0.0 } else { value };
        let rounded = format!(
            "{:.*}",
            self.max_fraction_digits,
            round_half_away(value, self.max_fraction_digits)
        );

        let (sign, unsigned) = match rounded.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", rounded.as_str()),
        };
        let (int_part, frac_part) = match unsigned.split_once('.') {
            Some((int_part, frac_part)) => (int_part, frac_part.trim_end_matches('0')),
            None => (unsigned, ""),
        };

        let mut out = String::with_capacity(rounded.len() + int_part.len() / 3);
        // Rounding can still yield "-0" for tiny negatives
        if !(int_part.bytes().all(|b| b == b'0') && frac_part.is_empty()) {
            out.push_str(sign);
        }
        out.push_str(&group_thousands(int_part));
        if !frac_part.is_empty() {
            out.push('.');
            out.push_str(frac_part);
        }
        out
    }

    pub fn format_currency(&self, value: f64) -> String {
        format!("{}{}", self.locale.currency_symbol(), self.format_number(value))
    }

    /// "￥199.2 / 100g", or the placeholder when absent
    pub fn format_unit_price(&self, unit_price: Option<f64>) -> String {
        match unit_price {
            Some(value) => format!("{} / 100g", self.format_currency(value)),
            None => PLACEHOLDER.to_string(),
        }
    }

    pub fn verdict_message(&self, verdict: Option<Verdict>) -> &'static str {
        let messages = self.locale.messages();
        match verdict {
            Some(Verdict::Equal) => messages.same_price,
            Some(Verdict::FirstCheaper) => messages.first_cheaper,
            Some(Verdict::SecondCheaper) => messages.second_cheaper,
            None => messages.awaiting_input,
        }
    }

    pub fn difference_line(&self, difference: Option<f64>) -> Option<String> {
        let difference = difference?;
        Some(match self.locale {
            Locale::Ja => format!("差額: {}円 / 100g", self.format_number(difference)),
            Locale::En => format!("Difference: {} / 100g", self.format_currency(difference)),
        })
    }

    pub fn badge(&self, unit_price: Option<f64>, is_cheaper: bool) -> &'static str {
        let messages = self.locale.messages();
        match (unit_price, is_cheaper) {
            (None, _) => messages.badge_waiting,
            (Some(_), true) => messages.badge_cheapest,
            (Some(_), false) => messages.badge_compared,
        }
    }

    pub fn item_line(&self, index: usize, unit_price: Option<f64>, is_cheaper: bool) -> String {
        format!(
            "{}: {} [{}]",
            (self.locale.messages().item_label)(index),
            self.format_unit_price(unit_price),
            self.badge(unit_price, is_cheaper)
        )
    }

    /// Full multi-line report for one comparison
    pub fn render(&self, result: &ComparisonResult) -> String {
        let mut lines = vec![
            self.item_line(1, result.unit_price_a, result.is_first_cheaper()),
            self.item_line(2, result.unit_price_b, result.is_second_cheaper()),
            self.verdict_message(result.verdict).to_string(),
        ];
        if let Some(line) = self.difference_line(result.difference) {
            lines.push(line);
        }
        lines.join("\n")
    }
}

impl Default for ReportFormatter {
    fn default() -> Self {
        Self::from_config(&Config::empty())
    }
}

/// Ties round away from zero, unlike `{:.N}` which rounds them to even
fn round_half_away(value: f64, digits: usize) -> f64 {
    let factor = 10f64.powi(digits as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::compute_comparison;

    #[test]
    fn test_format_number() {
        let formatter = ReportFormatter::new(Locale::Ja, 2);
        assert_eq!(formatter.format_number(199.2), "199.2");
        assert_eq!(formatter.format_number(159.6), "159.6");
        assert_eq!(formatter.format_number(500.0), "500");
        assert_eq!(formatter.format_number(0.0), "0");
        assert_eq!(formatter.format_number(-0.0), "0");
        assert_eq!(formatter.format_number(0.001), "0");
        assert_eq!(formatter.format_number(33.3333), "33.33");
        assert_eq!(formatter.format_number(1234567.891), "1,234,567.89");
        assert_eq!(formatter.format_number(999.0), "999");
        assert_eq!(formatter.format_number(1000.0), "1,000");
    }

    #[test]
    fn test_format_number_custom_digits() {
        assert_eq!(ReportFormatter::new(Locale::En, 0).format_number(12.7), "13");
        assert_eq!(ReportFormatter::new(Locale::En, 4).format_number(1.23456), "1.2346");
    }

    #[test]
    fn test_format_number_rounds_ties_away_from_zero() {
        let two = ReportFormatter::new(Locale::Ja, 2);
        assert_eq!(two.format_number(0.125), "0.13");
        assert_eq!(two.format_number(-0.125), "-0.13");
        assert_eq!(two.format_number(1.005), "1");

        let zero = ReportFormatter::new(Locale::Ja, 0);
        assert_eq!(zero.format_number(2.5), "3");
        assert_eq!(zero.format_number(0.5), "1");
    }

    #[test]
    fn test_format_unit_price_rounds_ties_up() {
        let ja = ReportFormatter::new(Locale::Ja, 2);
        let result = compute_comparison("800", "1", "", "");
        assert_eq!(ja.format_unit_price(result.unit_price_a), "￥0.13 / 100g");
    }

    #[test]
    fn test_format_unit_price() {
        let ja = ReportFormatter::new(Locale::Ja, 2);
        let en = ReportFormatter::new(Locale::En, 2);
        assert_eq!(ja.format_unit_price(Some(199.2)), "￥199.2 / 100g");
        assert_eq!(en.format_unit_price(Some(1500.0)), "¥1,500 / 100g");
        assert_eq!(ja.format_unit_price(None), PLACEHOLDER);
    }

    #[test]
    fn test_verdict_messages() {
        let ja = ReportFormatter::new(Locale::Ja, 2);
        assert_eq!(ja.verdict_message(Some(Verdict::Equal)), "どちらも同じ価格です");
        assert_eq!(ja.verdict_message(Some(Verdict::SecondCheaper)), "商品2のほうが安いです");
        assert_eq!(
            ja.verdict_message(None),
            "2つの商品に容量と価格を入力してください。"
        );

        let en = ReportFormatter::new(Locale::En, 2);
        assert_eq!(en.verdict_message(Some(Verdict::FirstCheaper)), "Product 1 is cheaper");
    }

    #[test]
    fn test_difference_line() {
        let ja = ReportFormatter::new(Locale::Ja, 2);
        assert_eq!(ja.difference_line(Some(39.6)).unwrap(), "差額: 39.6円 / 100g");
        assert_eq!(ja.difference_line(None), None);

        let en = ReportFormatter::new(Locale::En, 2);
        assert_eq!(en.difference_line(Some(0.0)).unwrap(), "Difference: ¥0 / 100g");
    }

    #[test]
    fn test_badges() {
        let ja = ReportFormatter::new(Locale::Ja, 2);
        assert_eq!(ja.badge(None, false), "入力待ち");
        assert_eq!(ja.badge(Some(1.0), true), "最安");
        assert_eq!(ja.badge(Some(1.0), false), "比較対象");
    }

    #[test]
    fn test_render_full_report() {
        let result = compute_comparison("250", "498", "500", "798");
        let report = ReportFormatter::new(Locale::Ja, 2).render(&result);
        assert_eq!(
            report,
            "商品1の100gあたり: ￥199.2 / 100g [比較対象]\n\
             商品2の100gあたり: ￥159.6 / 100g [最安]\n\
             商品2のほうが安いです\n\
             差額: 39.6円 / 100g"
        );
    }

    #[test]
    fn test_render_incomplete_report() {
        let result = compute_comparison("", "100", "200", "100");
        let report = ReportFormatter::new(Locale::En, 2).render(&result);
        assert_eq!(
            report,
            "Product 1 per 100g: -- [Waiting for input]\n\
             Product 2 per 100g: ¥50 / 100g [Compared]\n\
             Enter weight and price for both products."
        );
    }

    #[test]
    fn test_render_equal_report_has_no_cheapest() {
        let result = compute_comparison("100", "500", "100", "500");
        let report = ReportFormatter::new(Locale::En, 2).render(&result);
        assert!(!report.contains("Cheapest"));
        assert!(report.contains("Both products cost the same"));
        assert!(report.ends_with("Difference: ¥0 / 100g"));
    }
}
