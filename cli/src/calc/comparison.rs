use super::parse::{parse_price, parse_weight};
use super::unit_price::calculate_unit_price;
use serde::{Deserialize, Serialize};

/// Raw text the user typed for one product
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct RawEntry {
    pub weight: String,
    pub price: String,
}

impl RawEntry {
    pub fn new(weight: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            weight: weight.into(),
            price: price.into(),
        }
    }

    /// Price per 100 g for this entry, if both fields are valid
    pub fn unit_price(&self) -> Option<f64> {
        calculate_unit_price(parse_weight(&self.weight), parse_price(&self.price))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum Verdict {
    #[serde(rename = "A")]
    FirstCheaper,
    #[serde(rename = "B")]
    SecondCheaper,
    #[serde(rename = "equal")]
    Equal,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Comparison {
    pub verdict: Verdict,
    /// Absolute difference in price per 100 g
    pub difference: f64,
}

/// Everything the presentation layer needs for one pair of entries.
/// Absent values serialize as `null`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    pub unit_price_a: Option<f64>,
    pub unit_price_b: Option<f64>,
    pub verdict: Option<Verdict>,
    pub difference: Option<f64>,
}

impl ComparisonResult {
    pub fn comparison(&self) -> Option<Comparison> {
        Some(Comparison {
            verdict: self.verdict?,
            difference: self.difference?,
        })
    }

    pub fn is_first_cheaper(&self) -> bool {
        self.verdict == Some(Verdict::FirstCheaper)
    }

    pub fn is_second_cheaper(&self) -> bool {
        self.verdict == Some(Verdict::SecondCheaper)
    }
}

/// Compare two unit prices.
///
/// Equality is exact: only a difference of exactly zero is `Equal`.
pub fn build_comparison(
    unit_price_a: Option<f64>,
    unit_price_b: Option<f64>,
) -> Option<Comparison> {
    let (a, b) = (unit_price_a?, unit_price_b?);
    let difference = (a - b).abs();

    let verdict = if difference == 0.0 {
        Verdict::Equal
    } else if a < b {
        Verdict::FirstCheaper
    } else {
        Verdict::SecondCheaper
    };

    Some(Comparison {
        verdict,
        difference,
    })
}

/// Run the whole pipeline over two raw entries
pub fn compare_entries(first: &RawEntry, second: &RawEntry) -> ComparisonResult {
    let unit_price_a = first.unit_price();
    let unit_price_b = second.unit_price();
    let comparison = build_comparison(unit_price_a, unit_price_b);

    ComparisonResult {
        unit_price_a,
        unit_price_b,
        verdict: comparison.map(|c| c.verdict),
        difference: comparison.map(|c| c.difference),
    }
}

/// Parse, normalize and compare two products given as raw text
pub fn compute_comparison(
    weight_a: &str,
    price_a: &str,
    weight_b: &str,
    price_b: &str,
) -> ComparisonResult {
    compare_entries(
        &RawEntry::new(weight_a, price_a),
        &RawEntry::new(weight_b, price_b),
    )
}
