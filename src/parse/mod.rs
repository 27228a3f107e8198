//! Parsing of human-readable magnitude-suffixed numbers ("400k", "3.28M", "1.2B").

/// A cell value as it arrives from a source table: either already numeric,
/// or text that still needs interpretation.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Number(f64),
    Text(String),
}

/// Interpret a raw cell value as a float.
///
/// Text values are lowercased and stripped of commas and whitespace, then
/// checked for a magnitude suffix in the order k → m → b (first match wins):
/// the letter is removed and the parsed remainder scaled by 1e3 / 1e6 / 1e9.
/// Anything else falls through to a plain float parse.
///
/// Returns `None` on any parse failure. Never errors, never panics.
pub fn parse_value(value: &RawValue) -> Option<f64> {
    match value {
        RawValue::Number(n) => Some(*n).filter(|v| v.is_finite()),
        RawValue::Text(s) => parse_magnitude(s),
    }
}

/// Text half of [`parse_value`]: parse a string with an optional k/m/b suffix.
pub fn parse_magnitude(s: &str) -> Option<f64> {
    let cleaned: String = s
        .to_lowercase()
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect();

    let parsed = if cleaned.contains('k') {
        cleaned.replace('k', "").parse::<f64>().ok().map(|v| v * 1e3)
    } else if cleaned.contains('m') {
        cleaned.replace('m', "").parse::<f64>().ok().map(|v| v * 1e6)
    } else if cleaned.contains('b') {
        cleaned.replace('b', "").parse::<f64>().ok().map(|v| v * 1e9)
    } else {
        cleaned.parse::<f64>().ok()
    };

    parsed.filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_thousands_suffix() {
        assert_eq!(parse_magnitude("400k"), Some(400_000.0));
        assert_eq!(parse_magnitude("400K"), Some(400_000.0));
        assert_eq!(parse_magnitude("1.5k"), Some(1_500.0));
    }

    #[test]
    fn parses_millions_suffix() {
        assert_eq!(parse_magnitude("3.28M"), Some(3_280_000.0));
        assert_eq!(parse_magnitude("3.28m"), Some(3_280_000.0));
    }

    #[test]
    fn parses_billions_suffix() {
        assert_eq!(parse_magnitude("1.2B"), Some(1_200_000_000.0));
    }

    #[test]
    fn strips_commas_and_whitespace() {
        assert_eq!(parse_magnitude("1,234"), Some(1234.0));
        assert_eq!(parse_magnitude(" 2.5 M "), Some(2_500_000.0));
        assert_eq!(parse_magnitude("1,200.5k"), Some(1_200_500.0));
    }

    #[test]
    fn parses_plain_numbers() {
        assert_eq!(parse_magnitude("42.5"), Some(42.5));
        assert_eq!(parse_magnitude("-7"), Some(-7.0));
        assert_eq!(parse_magnitude("0"), Some(0.0));
    }

    #[test]
    fn garbage_is_none_not_an_error() {
        assert_eq!(parse_magnitude("n/a"), None);
        assert_eq!(parse_magnitude(""), None);
        assert_eq!(parse_magnitude("--"), None);
        assert_eq!(parse_magnitude("12.3.4"), None);
    }

    #[test]
    fn first_suffix_match_wins() {
        // Contains both 'm' and 'b': the m-branch runs, leaving an
        // unparseable remainder, and the result is None rather than a
        // b-scaled value.
        assert_eq!(parse_magnitude("1.2mb"), None);
        // All occurrences of the matched letter are removed.
        assert_eq!(parse_magnitude("12kk"), Some(12_000.0));
    }

    #[test]
    fn numeric_input_passes_through() {
        assert_eq!(parse_value(&RawValue::Number(42.5)), Some(42.5));
        assert_eq!(parse_value(&RawValue::Number(f64::NAN)), None);
        assert_eq!(
            parse_value(&RawValue::Text("3.28M".into())),
            Some(3_280_000.0)
        );
    }
}
