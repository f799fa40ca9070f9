use std::io::Write;

use locale_format::{LocaleRepository, LocalizationError, NumberFormatter, NumberFormattingRules};

fn formatter() -> NumberFormatter {
    NumberFormatter::embedded().unwrap()
}

#[test]
fn test_reference_locales() {
    let formatter = formatter();
    assert_eq!(formatter.format_number("en-US", 1234568.12345).unwrap(), "1,234,568.123");
    assert_eq!(formatter.format_number("de-DE", 1234568.12345).unwrap(), "1.234.568,123");
    assert_eq!(formatter.format_number("fr-FR", 1234568.12345).unwrap(), "1 234 568,123");
    assert_eq!(formatter.format_number("hi-IN", 1234568.12345).unwrap(), "12,34,568.123");
}

#[test]
fn test_idempotent() {
    let formatter = formatter();
    let first = formatter.format_number("hi-IN", 98765432.1).unwrap();
    let second = formatter.format_number("hi-IN", 98765432.1).unwrap();
    assert_eq!(first, second);
    assert_eq!(first, "9,87,65,432.100");
}

#[test]
fn test_zero_fraction_still_rendered() {
    assert_eq!(formatter().format_number("en-US", 1000.0).unwrap(), "1,000.000");
}

#[test]
fn test_unknown_locale() {
    let err = formatter().format_number("xx-ZZ", 1.0).unwrap_err();
    match err {
        LocalizationError::UnknownLocale { locale } => assert_eq!(locale, "xx-ZZ"),
        other => panic!("unexpected error: {other}"),
    }
    // locale is checked first
    assert!(matches!(
        formatter().format_number("xx-ZZ", f64::NAN),
        Err(LocalizationError::UnknownLocale { .. })
    ));
}

#[test]
fn test_non_finite_value() {
    let formatter = formatter();
    for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        assert!(matches!(
            formatter.format_number("en-US", value),
            Err(LocalizationError::InvalidNumber { .. })
        ));
    }
}

#[test]
fn test_locale_tags_normalized_and_fallback() {
    let formatter = formatter();
    assert_eq!(formatter.format_number("de_de", 1234.5).unwrap(), "1.234,500");
    assert_eq!(formatter.format_number("fr-BE", 1234.5).unwrap(), "1 234,500");
}

#[test]
fn test_decimal_literal_input() {
    let formatter = formatter();
    let value = "-1234568.12345".parse().unwrap();
    assert_eq!(formatter.format_decimal("pt-BR", &value).unwrap(), "-1.234.568,123");
    assert!(matches!(
        "12,5".parse::<locale_format::DecimalNumber>(),
        Err(LocalizationError::InvalidNumber { .. })
    ));
}

#[test]
fn test_parse_rejects_other_locale_output() {
    let formatter = formatter();
    assert!(matches!(
        formatter.parse_number("hi-IN", "1,234,568.123"),
        Err(LocalizationError::MalformedNumber { .. })
    ));
}

#[test]
fn test_overrides_from_file() {
    let path = std::env::temp_dir().join(format!("locale-format-{}.toml", std::process::id()));
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "[de-CH]\ndecimal = \".\"\ngroup = \"’\"\n\n[en-US]\nrounding = \"down\"").unwrap();
    drop(file);

    let mut repository = LocaleRepository::embedded().unwrap();
    assert_eq!(repository.merge_file(&path).unwrap(), 2);
    std::fs::remove_file(&path).unwrap();

    let formatter = NumberFormatter::new(repository);
    assert_eq!(formatter.format_number("de-CH", 1234568.12345).unwrap(), "1’234’568.123");
    assert_eq!(formatter.format_number("en-US", 0.9999).unwrap(), "0.999");
}

#[test]
fn test_programmatic_locale() {
    let mut repository = LocaleRepository::new();
    repository
        .insert(
            "en-ZZ",
            NumberFormattingRules::default().with_grouping_pattern(vec![4]),
        )
        .unwrap();
    let formatter = NumberFormatter::new(repository);
    assert_eq!(formatter.format_number("en-ZZ", 123456789.0).unwrap(), "1,2345,6789.000");
    assert!(formatter.format_number("en-US", 1.0).is_err());
}
