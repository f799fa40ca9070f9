use locale_format::{CachedRuleProvider, LocaleRepository, NumberFormatter};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct LocalizedNumber {
    name: String,
    locale: String,
    raw_number: f64,
    formatted: String,
}

fn localized_numbers() -> Vec<LocalizedNumber> {
    serde_json::from_str(include_str!("fixtures/localized_numbers.json")).unwrap()
}

#[test]
fn test_it_should_format_numbers() {
    let cases = localized_numbers();
    assert_eq!(cases.len(), 18);

    let formatter = NumberFormatter::embedded().unwrap();
    for case in &cases {
        let locale = formatter.locale(case.locale.as_str()).unwrap();
        assert_eq!(
            locale.format_number(case.raw_number).unwrap(),
            case.formatted,
            "{} ({})",
            case.name,
            case.locale
        );
    }
}

#[test]
fn test_formatted_numbers_parse_back() {
    let formatter = NumberFormatter::embedded().unwrap();
    for case in localized_numbers() {
        let parsed = formatter.parse_number(case.locale.as_str(), &case.formatted).unwrap();
        assert_eq!(parsed.to_string(), "1234568.123", "{}", case.name);
    }
}

#[test]
fn test_cached_provider_after_clear() {
    let provider = CachedRuleProvider::new(LocaleRepository::embedded().unwrap());
    provider.clear();

    let formatter = NumberFormatter::new(&provider);
    for case in localized_numbers() {
        assert_eq!(
            formatter.format_number(case.locale.as_str(), case.raw_number).unwrap(),
            case.formatted
        );
    }
    assert_eq!(provider.len(), 18);
}
