pub mod calc;
pub mod config;
pub mod display;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use calc::{compute_comparison, parse_price, parse_weight, ComparisonResult, Verdict};
