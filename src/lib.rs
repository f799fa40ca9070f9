pub mod catalog;
pub mod decimal;
pub mod error;
pub mod formatter;
pub mod locale;
pub mod parser;
pub mod types;

// Main API
pub use decimal::DecimalNumber;
pub use error::{LocaleDataError, LocalizationError};
pub use formatter::{format_decimal, format_number, Locale, NumberFormatter};
pub use locale::{CachedRuleProvider, LocaleRepository, RuleProvider};
pub use types::*;
