//! Number formatting module
//!
//! This module renders numbers according to resolved locale rules.
//! The pure entry points are `format_number` and `format_decimal`; the
//! `NumberFormatter` resolves rules through a `RuleProvider` first.

mod grouping;

use std::sync::Arc;

use tracing::trace;

use crate::decimal::DecimalNumber;
use crate::error::Result;
use crate::locale::{LocaleRepository, RuleProvider};
use crate::parser::parse_localized_number;
use crate::types::{LocaleId, NumberFormattingRules};

pub(crate) use grouping::group_digits;

/// Format a float according to the specified locale rules
///
/// # Arguments
/// * `value` - The numeric value to format, must be finite
/// * `rules` - Resolved locale rules
///
/// # Returns
/// * `Result<String>` - The formatted number, or `InvalidNumber` for NaN and infinities
///
/// # Examples
/// ```
/// use locale_format::formatter::format_number;
/// use locale_format::NumberFormattingRules;
///
/// let result = format_number(1234568.12345, &NumberFormattingRules::default()).unwrap();
/// assert_eq!(result, "1,234,568.123");
/// ```
pub fn format_number(value: f64, rules: &NumberFormattingRules) -> Result<String> {
    let decimal = DecimalNumber::from_f64(value)?;
    Ok(format_decimal(&decimal, rules))
}

/// Format an exact decimal according to the specified locale rules
pub fn format_decimal(value: &DecimalNumber, rules: &NumberFormattingRules) -> String {
    let rounded = value.round(rules.max_fraction_digits, rules.rounding);

    let integer = match rules.grouping_separator() {
        Some(separator) => group_digits(rounded.integer_digits(), &rules.grouping_pattern, separator),
        None => rounded.integer_digits().to_string(),
    };

    let mut fraction = rounded.fraction_digits().to_string();
    while fraction.len() < rules.min_fraction_digits {
        fraction.push('0');
    }

    let mut result = String::with_capacity(integer.len() + fraction.len() + 2);
    if rounded.is_negative() {
        result.push(rules.minus_sign);
    }
    result.push_str(&integer);
    if !fraction.is_empty() {
        result.push(rules.decimal_separator);
        result.push_str(&fraction);
    }
    result
}

/// A locale bound to its resolved formatting rules
///
/// Obtained from `NumberFormatter::locale`, this is the handle used to
/// format and parse numbers for one locale without further lookups.
#[derive(Debug, Clone)]
pub struct Locale {
    id: LocaleId,
    rules: Arc<NumberFormattingRules>,
}

impl Locale {
    pub fn new(id: LocaleId, rules: Arc<NumberFormattingRules>) -> Self {
        Self { id, rules }
    }

    pub fn id(&self) -> &LocaleId {
        &self.id
    }

    pub fn rules(&self) -> &NumberFormattingRules {
        &self.rules
    }

    pub fn format_number(&self, value: f64) -> Result<String> {
        format_number(value, &self.rules)
    }

    pub fn format_decimal(&self, value: &DecimalNumber) -> String {
        format_decimal(value, &self.rules)
    }

    /// Read back a number rendered in this locale
    pub fn parse_number(&self, text: &str) -> Result<DecimalNumber> {
        parse_localized_number(text, &self.rules)
    }
}

/// Formats numbers by locale identifier, resolving rules through a provider
///
/// # Examples
/// ```
/// use locale_format::NumberFormatter;
///
/// let formatter = NumberFormatter::embedded().unwrap();
/// assert_eq!(formatter.format_number("de-DE", 1234568.12345).unwrap(), "1.234.568,123");
/// assert_eq!(formatter.format_number("hi-IN", 1234568.12345).unwrap(), "12,34,568.123");
/// ```
#[derive(Debug, Clone)]
pub struct NumberFormatter<P = LocaleRepository> {
    provider: P,
}

impl NumberFormatter<LocaleRepository> {
    /// A formatter backed by the built-in locale table
    pub fn embedded() -> Result<Self> {
        Ok(Self::new(LocaleRepository::embedded()?))
    }
}

impl<P: RuleProvider> NumberFormatter<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Resolve a locale handle; fails with `UnknownLocale` for unresolvable identifiers
    pub fn locale(&self, locale: impl Into<LocaleId>) -> Result<Locale> {
        let id = locale.into();
        let rules = self.provider.resolve_rules(&id)?;
        Ok(Locale::new(id, rules))
    }

    /// Format `value` with the rules of `locale`
    ///
    /// The locale is resolved before the value is inspected, so an unknown
    /// locale is reported even for non-finite input. No partial output is
    /// produced on failure.
    pub fn format_number(&self, locale: impl Into<LocaleId>, value: f64) -> Result<String> {
        let locale = self.locale(locale)?;
        let formatted = locale.format_number(value)?;
        trace!(locale = %locale.id(), %formatted, "formatted number");
        Ok(formatted)
    }

    pub fn format_decimal(&self, locale: impl Into<LocaleId>, value: &DecimalNumber) -> Result<String> {
        Ok(self.locale(locale)?.format_decimal(value))
    }

    pub fn parse_number(&self, locale: impl Into<LocaleId>, text: &str) -> Result<DecimalNumber> {
        self.locale(locale)?.parse_number(text)
    }
}
