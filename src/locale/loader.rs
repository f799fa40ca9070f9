//! TOML locale table parsing

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::LocaleDataError;
use crate::types::{LocaleId, NumberFormattingRules, RoundingMode};

type Result<T> = std::result::Result<T, LocaleDataError>;

/// Key of the table every locale inherits from
pub(super) const BASE_TABLE: &str = "base";

/// Upper bound on configured fraction digits
const MAX_CONFIGURED_FRACTION_DIGITS: i64 = 20;

/// Layer a TOML document over `base` and `locales`
///
/// A `[base]` table in the document replaces the inherited defaults for the
/// locales it defines. Each locale table starts from the existing rules for
/// that locale when present, otherwise from the base.
pub(super) fn merge_document(
    toml_str: &str,
    base: &mut NumberFormattingRules,
    locales: &mut HashMap<LocaleId, Arc<NumberFormattingRules>>,
) -> Result<usize> {
    let document: toml::Table = toml::from_str(toml_str)?;

    if let Some(value) = document.get(BASE_TABLE) {
        let mut updated = base.clone();
        apply_table(&mut updated, BASE_TABLE, value)?;
        *base = updated;
    }

    let mut loaded = 0;
    for (tag, value) in &document {
        if tag == BASE_TABLE {
            continue;
        }

        let id = LocaleId::new(tag);
        if id.language().is_empty() {
            return Err(LocaleDataError::invalid(tag, "empty locale identifier"));
        }

        let mut rules = locales
            .get(&id)
            .map(|existing| existing.as_ref().clone())
            .unwrap_or_else(|| base.clone());
        apply_table(&mut rules, tag, value)?;
        locales.insert(id, Arc::new(rules));
        loaded += 1;
    }

    Ok(loaded)
}

/// Apply the keys of one locale table onto `rules`
fn apply_table(rules: &mut NumberFormattingRules, locale: &str, value: &toml::Value) -> Result<()> {
    let table = value
        .as_table()
        .ok_or_else(|| LocaleDataError::invalid(locale, "locale entry is not a table"))?;

    for (key, value) in table {
        match key.as_str() {
            "decimal" => rules.decimal_separator = single_char(locale, key, value)?,
            "group" => {
                let separator = single_char(locale, key, value)?;
                *rules = std::mem::take(rules).with_grouping_separator(separator);
            }
            "group_alternates" => {
                let primary = rules.grouping_separator();
                rules.grouping_separators = primary.into_iter().collect();
                for item in array(locale, key, value)? {
                    let separator = single_char(locale, key, item)?;
                    if !rules.grouping_separators.contains(&separator) {
                        rules.grouping_separators.push(separator);
                    }
                }
            }
            "grouping" => {
                rules.grouping_pattern = array(locale, key, value)?
                    .iter()
                    .map(|item| {
                        item.as_integer()
                            .filter(|size| *size > 0)
                            .map(|size| size as usize)
                            .ok_or_else(|| {
                                LocaleDataError::invalid(locale, "grouping sizes must be positive integers")
                            })
                    })
                    .collect::<Result<Vec<_>>>()?;
            }
            "min_fraction_digits" => rules.min_fraction_digits = fraction_digits(locale, key, value)?,
            "max_fraction_digits" => rules.max_fraction_digits = fraction_digits(locale, key, value)?,
            "minus" => rules.minus_sign = single_char(locale, key, value)?,
            "rounding" => {
                let name = value
                    .as_str()
                    .ok_or_else(|| LocaleDataError::invalid(locale, "rounding must be a string"))?;
                rules.rounding = RoundingMode::from_name(name).ok_or_else(|| {
                    LocaleDataError::invalid(locale, format!("unknown rounding mode '{name}'"))
                })?;
            }
            other => {
                return Err(LocaleDataError::invalid(locale, format!("unknown key '{other}'")));
            }
        }
    }

    rules
        .validate()
        .map_err(|reason| LocaleDataError::invalid(locale, reason))
}

fn single_char(locale: &str, key: &str, value: &toml::Value) -> Result<char> {
    let text = value
        .as_str()
        .ok_or_else(|| LocaleDataError::invalid(locale, format!("{key} must be a string")))?;
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(LocaleDataError::invalid(
            locale,
            format!("{key} must be exactly one character, got '{text}'"),
        )),
    }
}

fn array<'v>(locale: &str, key: &str, value: &'v toml::Value) -> Result<&'v Vec<toml::Value>> {
    value
        .as_array()
        .ok_or_else(|| LocaleDataError::invalid(locale, format!("{key} must be an array")))
}

fn fraction_digits(locale: &str, key: &str, value: &toml::Value) -> Result<usize> {
    value
        .as_integer()
        .filter(|digits| (0..=MAX_CONFIGURED_FRACTION_DIGITS).contains(digits))
        .map(|digits| digits as usize)
        .ok_or_else(|| {
            LocaleDataError::invalid(
                locale,
                format!("{key} must be an integer between 0 and {MAX_CONFIGURED_FRACTION_DIGITS}"),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(toml_str: &str) -> Result<HashMap<LocaleId, Arc<NumberFormattingRules>>> {
        let mut base = NumberFormattingRules::default();
        let mut locales = HashMap::new();
        merge_document(toml_str, &mut base, &mut locales)?;
        Ok(locales)
    }

    #[test]
    fn test_locale_inherits_base() {
        let locales = load(
            r#"
            [base]
            decimal = ","
            group = "."

            [xx-YY]
            grouping = [3, 2]
            "#,
        )
        .unwrap();
        let rules = &locales[&LocaleId::new("xx-YY")];
        assert_eq!(rules.decimal_separator, ',');
        assert_eq!(rules.grouping_separators, vec!['.']);
        assert_eq!(rules.grouping_pattern, vec![3, 2]);
    }

    #[test]
    fn test_group_alternates_keep_primary_first() {
        let locales = load(
            r#"
            [fr-FR]
            decimal = ","
            group = " "
            group_alternates = ["\u00A0", " "]
            "#,
        )
        .unwrap();
        let rules = &locales[&LocaleId::new("fr_FR")];
        assert_eq!(rules.grouping_separators, vec![' ', '\u{a0}']);
    }

    #[test]
    fn test_invalid_entries_rejected() {
        let cases = [
            "[xx]\ndecimal = \"..\"",
            "[xx]\ngrouping = [0]",
            "[xx]\nmin_fraction_digits = 4\nmax_fraction_digits = 2",
            "[xx]\nrounding = \"sideways\"",
            "[xx]\ncolour = \"red\"",
            "[xx]\ndecimal = \",\"",
            "xx = 3",
        ];
        for case in cases {
            assert!(
                matches!(load(case), Err(LocaleDataError::Invalid { .. })),
                "expected rejection of {case:?}"
            );
        }
        assert!(matches!(load("[xx"), Err(LocaleDataError::Toml(_))));
    }
}
