use winnow::combinator::{opt, preceded, separated};
use winnow::token::one_of;
use winnow::{ModalResult, Parser};

use crate::decimal::DecimalNumber;
use crate::error::{LocalizationError, Result};
use crate::parser::combinators::digit_run;
use crate::types::NumberFormattingRules;

struct LocalizedParts<'s> {
    negative: bool,
    groups: Vec<&'s str>,
    fraction: Option<&'s str>,
}

fn localized_number<'s>(
    input: &mut &'s str,
    rules: &NumberFormattingRules,
) -> ModalResult<LocalizedParts<'s>> {
    let is_separator = |c: char| rules.is_grouping_separator(c);

    (
        opt(one_of([rules.minus_sign])),
        separated(1.., digit_run, one_of(is_separator)),
        opt(preceded(one_of([rules.decimal_separator]), digit_run)),
    )
        .map(
            |(minus, groups, fraction): (Option<char>, Vec<&'s str>, Option<&'s str>)| {
                LocalizedParts {
                    negative: minus.is_some(),
                    groups,
                    fraction,
                }
            },
        )
        .parse_next(input)
}

/// Check digit groups (most significant first) against the grouping pattern
fn check_groups(groups: &[&str], pattern: &[usize]) -> std::result::Result<(), String> {
    if groups.len() == 1 {
        return Ok(());
    }
    if pattern.is_empty() {
        return Err("grouping separators are not used by this locale".to_string());
    }

    let mut sizes = pattern.iter().copied();
    let mut expected = pattern[0];
    let last = groups.len() - 1;
    for (idx, group) in groups.iter().rev().enumerate() {
        if let Some(size) = sizes.next() {
            expected = size;
        }
        let valid = if idx == last {
            group.len() <= expected
        } else {
            group.len() == expected
        };
        if !valid {
            return Err(format!(
                "digit group '{group}' does not match grouping size {expected}"
            ));
        }
    }
    Ok(())
}

/// Parse a number rendered with the given locale rules
///
/// Any of the locale's grouping separators is accepted between digit
/// groups, and group sizes must follow the grouping pattern. A number
/// without grouping separators is always accepted.
///
/// # Examples
/// ```
/// use locale_format::parser::parse_localized_number;
/// use locale_format::NumberFormattingRules;
///
/// let german = NumberFormattingRules::default()
///     .with_decimal_separator(',')
///     .with_grouping_separator('.');
/// let value = parse_localized_number("-1.234.568,123", &german).unwrap();
/// assert_eq!(value.to_string(), "-1234568.123");
/// ```
pub fn parse_localized_number(input_str: &str, rules: &NumberFormattingRules) -> Result<DecimalNumber> {
    let malformed = |reason: String| LocalizationError::MalformedNumber {
        input: input_str.to_string(),
        reason,
    };

    let mut input = input_str;
    let parts = localized_number(&mut input, rules)
        .map_err(|e| malformed(format!("parse error: {e:?}")))?;
    if !input.is_empty() {
        return Err(malformed(format!("unexpected trailing input '{input}'")));
    }
    check_groups(&parts.groups, &rules.grouping_pattern).map_err(malformed)?;

    let integer: String = parts.groups.concat();
    Ok(DecimalNumber::from_digits(
        parts.negative,
        &integer,
        parts.fraction.unwrap_or_default(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indian() -> NumberFormattingRules {
        NumberFormattingRules::default().with_grouping_pattern(vec![3, 2])
    }

    fn french() -> NumberFormattingRules {
        NumberFormattingRules::default()
            .with_decimal_separator(',')
            .with_grouping_separator(' ')
            .with_alternate_grouping_separator('\u{a0}')
            .with_alternate_grouping_separator('\u{202f}')
    }

    #[test]
    fn test_indian_grouping() {
        let value = parse_localized_number("12,34,568.123", &indian()).unwrap();
        assert_eq!(value.to_string(), "1234568.123");
        assert!(parse_localized_number("1,234,568.123", &indian()).is_err());
    }

    #[test]
    fn test_alternate_separators_accepted() {
        for input in ["1 234 568,123", "1\u{a0}234\u{a0}568,123", "1\u{202f}234 568,123"] {
            let value = parse_localized_number(input, &french()).unwrap();
            assert_eq!(value.to_string(), "1234568.123", "input {input:?}");
        }
    }

    #[test]
    fn test_ungrouped_and_negative() {
        let rules = NumberFormattingRules::default();
        assert_eq!(parse_localized_number("1234568", &rules).unwrap().to_string(), "1234568");
        assert_eq!(parse_localized_number("-0.500", &rules).unwrap().to_string(), "-0.5");
    }

    #[test]
    fn test_malformed_inputs() {
        let rules = NumberFormattingRules::default();
        for input in ["", "1,23", "1,,234", ",123", "1,234,", "1.234.567", "12 345", "--1"] {
            assert!(
                matches!(
                    parse_localized_number(input, &rules),
                    Err(LocalizationError::MalformedNumber { .. })
                ),
                "expected '{input}' to be rejected"
            );
        }
    }
}
