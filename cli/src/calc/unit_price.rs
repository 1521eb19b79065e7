/// Grams every unit price is normalized to
pub const UNIT_BASIS_GRAMS: f64 = 100.0;

/// Price per 100 g, or `None` if an operand is missing or the weight is zero.
///
/// No rounding happens here; the display layer rounds.
pub fn calculate_unit_price(weight: Option<f64>, price: Option<f64>) -> Option<f64> {
    let (weight, price) = (weight?, price?);
    if weight == 0.0 {
        return None;
    }

    let unit_price = (price / weight) * UNIT_BASIS_GRAMS;
    unit_price.is_finite().then_some(unit_price)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_price() {
        assert_eq!(calculate_unit_price(Some(200.0), Some(300.0)), Some(150.0));
        assert_eq!(calculate_unit_price(Some(100.0), Some(0.0)), Some(0.0));
        assert_eq!(calculate_unit_price(Some(1000.0), Some(250.0)), Some(25.0));
    }

    #[test]
    fn test_unit_price_absent_operands() {
        assert_eq!(calculate_unit_price(None, Some(300.0)), None);
        assert_eq!(calculate_unit_price(Some(200.0), None), None);
        assert_eq!(calculate_unit_price(None, None), None);
    }

    #[test]
    fn test_unit_price_zero_weight() {
        assert_eq!(calculate_unit_price(Some(0.0), Some(300.0)), None);
        assert_eq!(calculate_unit_price(Some(0.0), Some(0.0)), None);
    }

    #[test]
    fn test_unit_price_overflow() {
        assert_eq!(calculate_unit_price(Some(1e-300), Some(1e300)), None);
    }
}
