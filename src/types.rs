//! Type definitions for locale-aware number formatting
//!
//! This module defines locale identifiers and the per-locale rule set that
//! drives formatting and parsing of numbers.

use std::fmt;

/// Number of fractional digits rendered by default
pub const DEFAULT_FRACTION_DIGITS: usize = 3;

/// Identifies a set of regional formatting conventions, e.g. `en-US`
///
/// The tag is normalized on construction: `_` and `-` are both accepted as
/// subtag delimiters, the language is lowercased, a two-letter region is
/// uppercased and a four-letter script is titlecased.
///
/// ```
/// use locale_format::LocaleId;
///
/// assert_eq!(LocaleId::new("en_us").as_str(), "en-US");
/// assert_eq!(LocaleId::new("ZH-hans-cn").as_str(), "zh-Hans-CN");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocaleId(String);

impl LocaleId {
    pub fn new(tag: &str) -> Self {
        let mut normalized = String::with_capacity(tag.len());
        for (idx, subtag) in tag.trim().split(['-', '_']).enumerate() {
            if idx > 0 {
                normalized.push('-');
            }
            if idx == 0 {
                normalized.push_str(&subtag.to_ascii_lowercase());
            } else if subtag.len() == 2 {
                normalized.push_str(&subtag.to_ascii_uppercase());
            } else if subtag.len() == 4 {
                let mut chars = subtag.chars();
                if let Some(first) = chars.next() {
                    normalized.push(first.to_ascii_uppercase());
                    normalized.push_str(&chars.as_str().to_ascii_lowercase());
                }
            } else {
                normalized.push_str(&subtag.to_ascii_lowercase());
            }
        }
        LocaleId(normalized)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The primary language subtag (`en` for `en-US`)
    pub fn language(&self) -> &str {
        self.0.split('-').next().unwrap_or_default()
    }

    /// Whether this identifier carries subtags beyond the language
    pub fn has_subtags(&self) -> bool {
        self.0.contains('-')
    }
}

impl fmt::Display for LocaleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LocaleId {
    fn from(tag: &str) -> Self {
        LocaleId::new(tag)
    }
}

impl From<String> for LocaleId {
    fn from(tag: String) -> Self {
        LocaleId::new(&tag)
    }
}

impl From<&LocaleId> for LocaleId {
    fn from(id: &LocaleId) -> Self {
        id.clone()
    }
}

/// How excess fractional digits are discarded
///
/// Rounding operates on the magnitude of the exact decimal digits of the
/// value, so `HalfUp` rounds ties away from zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundingMode {
    /// Ties round away from zero: 0.0005 -> 0.001
    #[default]
    HalfUp,
    /// Ties round to the even neighbour: 0.0005 -> 0.000, 0.0015 -> 0.002
    HalfEven,
    /// Excess digits are dropped
    Down,
}

impl RoundingMode {
    /// Parse the configuration spelling (`half-up`, `half-even`, `down`)
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().replace('_', "-").as_str() {
            "half-up" => Some(RoundingMode::HalfUp),
            "half-even" => Some(RoundingMode::HalfEven),
            "down" | "truncate" => Some(RoundingMode::Down),
            _ => None,
        }
    }
}

/// Per-locale number formatting conventions
#[derive(Debug, Clone, PartialEq)]
pub struct NumberFormattingRules {
    /// Character between integer and fractional digits
    pub decimal_separator: char,
    /// Grouping separators; the first one is rendered, all are accepted when parsing
    pub grouping_separators: Vec<char>,
    /// Group sizes from the least significant digit; the last entry repeats
    pub grouping_pattern: Vec<usize>,
    /// Fractional digits always rendered (zero padded)
    pub min_fraction_digits: usize,
    /// Fractional digits kept after rounding
    pub max_fraction_digits: usize,
    /// Sign prefixed to negative values
    pub minus_sign: char,
    /// Policy for digits beyond `max_fraction_digits`
    pub rounding: RoundingMode,
}

impl Default for NumberFormattingRules {
    fn default() -> Self {
        Self {
            decimal_separator: '.',
            grouping_separators: vec![','],
            grouping_pattern: vec![3],
            min_fraction_digits: DEFAULT_FRACTION_DIGITS,
            max_fraction_digits: DEFAULT_FRACTION_DIGITS,
            minus_sign: '-',
            rounding: RoundingMode::HalfUp,
        }
    }
}

impl NumberFormattingRules {
    /// The separator rendered between digit groups, if grouping is enabled
    pub fn grouping_separator(&self) -> Option<char> {
        self.grouping_separators.first().copied()
    }

    pub fn is_grouping_separator(&self, c: char) -> bool {
        self.grouping_separators.contains(&c)
    }

    pub fn with_decimal_separator(mut self, separator: char) -> Self {
        self.decimal_separator = separator;
        self
    }

    /// Replace the rendered grouping separator, keeping any alternates
    pub fn with_grouping_separator(mut self, separator: char) -> Self {
        self.grouping_separators.retain(|c| *c != separator);
        if self.grouping_separators.is_empty() {
            self.grouping_separators.push(separator);
        } else {
            self.grouping_separators[0] = separator;
        }
        self
    }

    /// Accept an additional grouping separator when parsing
    pub fn with_alternate_grouping_separator(mut self, separator: char) -> Self {
        if !self.grouping_separators.contains(&separator) {
            self.grouping_separators.push(separator);
        }
        self
    }

    pub fn with_grouping_pattern(mut self, pattern: Vec<usize>) -> Self {
        self.grouping_pattern = pattern;
        self
    }

    pub fn with_fraction_digits(mut self, min: usize, max: usize) -> Self {
        self.min_fraction_digits = min;
        self.max_fraction_digits = max;
        self
    }

    pub fn with_minus_sign(mut self, minus: char) -> Self {
        self.minus_sign = minus;
        self
    }

    pub fn with_rounding(mut self, rounding: RoundingMode) -> Self {
        self.rounding = rounding;
        self
    }

    /// Check the rule set for contradictions; returns a description of the first one found
    pub fn validate(&self) -> Result<(), String> {
        if self.decimal_separator.is_ascii_digit() || self.minus_sign.is_ascii_digit() {
            return Err("separators and signs must not be digits".to_string());
        }
        if let Some(c) = self.grouping_separators.iter().find(|c| c.is_ascii_digit()) {
            return Err(format!("grouping separator '{c}' is a digit"));
        }
        if self.is_grouping_separator(self.decimal_separator) {
            return Err(format!(
                "decimal separator '{}' is also a grouping separator",
                self.decimal_separator
            ));
        }
        if self.grouping_pattern.contains(&0) {
            return Err("grouping sizes must be positive".to_string());
        }
        if self.min_fraction_digits > self.max_fraction_digits {
            return Err(format!(
                "min_fraction_digits ({}) exceeds max_fraction_digits ({})",
                self.min_fraction_digits, self.max_fraction_digits
            ));
        }
        Ok(())
    }
}
