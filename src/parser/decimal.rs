use winnow::combinator::{opt, preceded};
use winnow::token::{literal, one_of};
use winnow::{ModalResult, Parser};

use crate::decimal::DecimalNumber;
use crate::error::{LocalizationError, Result};
use crate::parser::combinators::digit_run;

/// Sign, integer digits and optional fractional digits of a literal
type LiteralParts<'s> = (Option<char>, &'s str, Option<&'s str>);

fn decimal_literal<'s>(input: &mut &'s str) -> ModalResult<LiteralParts<'s>> {
    (
        opt(one_of(['+', '-'])),
        digit_run,
        opt(preceded(literal("."), digit_run)),
    )
        .parse_next(input)
}

/// Parse a plain decimal literal
///
/// Accepts an optional sign, at least one integer digit and an optional
/// `.` followed by fractional digits. Exponents, grouping and surrounding
/// whitespace are rejected.
///
/// # Examples
/// ```
/// use locale_format::parser::parse_decimal_literal;
///
/// let value = parse_decimal_literal("-1234568.12345").unwrap();
/// assert!(value.is_negative());
/// assert_eq!(value.integer_digits(), "1234568");
/// assert!(parse_decimal_literal("1e5").is_err());
/// ```
pub fn parse_decimal_literal(input_str: &str) -> Result<DecimalNumber> {
    let invalid = || LocalizationError::InvalidNumber {
        value: input_str.to_string(),
    };

    let mut input = input_str;
    let (sign, integer, fraction) = decimal_literal(&mut input).map_err(|_| invalid())?;
    if !input.is_empty() {
        return Err(invalid());
    }

    Ok(DecimalNumber::from_digits(
        sign == Some('-'),
        integer,
        fraction.unwrap_or_default(),
    ))
}
