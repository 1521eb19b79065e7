// Unit-price computation core: text validation, price per 100 g, comparison
pub mod comparison;
pub mod parse;
pub mod unit_price;


pub use comparison::*;
pub use parse::*;
pub use unit_price::*;
