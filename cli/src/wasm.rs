// WebAssembly bindings for the unit-price calculator
use crate::calc;
use crate::display::{Locale, ReportFormatter};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct UnitPriceWasm {
    formatter: ReportFormatter,
}

impl Default for UnitPriceWasm {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl UnitPriceWasm {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            formatter: ReportFormatter::default(),
        }
    }

    /// Switch the display locale ("ja" or "en")
    #[wasm_bindgen]
    pub fn set_locale(&mut self, locale: &str) -> Result<(), JsValue> {
        let locale: Locale = locale
            .parse()
            .map_err(|e| JsValue::from_str(&format!("{}", e)))?;
        self.formatter = self.formatter.with_locale(locale);
        Ok(())
    }

    /// Weight in grams, or undefined when empty, non-numeric or not positive
    #[wasm_bindgen]
    pub fn parse_weight(&self, text: &str) -> Option<f64> {
        calc::parse_weight(text)
    }

    /// Price, or undefined when empty, non-numeric or negative
    #[wasm_bindgen]
    pub fn parse_price(&self, text: &str) -> Option<f64> {
        calc::parse_price(text)
    }

    /// Returns JSON string: {"unitPriceA", "unitPriceB", "verdict", "difference"}
    #[wasm_bindgen]
    pub fn compute_comparison(
        &self,
        weight_a: &str,
        price_a: &str,
        weight_b: &str,
        price_b: &str,
    ) -> Result<String, JsValue> {
        let result = calc::compute_comparison(weight_a, price_a, weight_b, price_b);
        serde_json::to_string(&result)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize result: {}", e)))
    }

    /// Same as `compute_comparison` but returns a plain JS object
    #[wasm_bindgen]
    pub fn compute_comparison_object(
        &self,
        weight_a: &str,
        price_a: &str,
        weight_b: &str,
        price_b: &str,
    ) -> Result<JsValue, JsValue> {
        let json = self.compute_comparison(weight_a, price_a, weight_b, price_b)?;
        js_sys::JSON::parse(&json)
    }

    /// Localized multi-line report for the current inputs
    #[wasm_bindgen]
    pub fn render_report(
        &self,
        weight_a: &str,
        price_a: &str,
        weight_b: &str,
        price_b: &str,
    ) -> String {
        let result = calc::compute_comparison(weight_a, price_a, weight_b, price_b);
        self.formatter.render(&result)
    }
}
