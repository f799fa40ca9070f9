//! Number parsing module
//!
//! This module reads plain decimal literals (`-1234568.12345`) and localized
//! number strings (`1.234.568,123`) back into `DecimalNumber` values.
//! Both parsers are built from winnow combinators.

mod combinators;
mod decimal;
mod localized;

pub use decimal::parse_decimal_literal;
pub use localized::parse_localized_number;
