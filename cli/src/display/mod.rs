// Text rendering of comparison results for the two supported locales
pub mod formatter;
pub mod locale;

pub use formatter::*;
pub use locale::*;
