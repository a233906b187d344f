//! Coercion of raw cell text into sortable values

use board_loader::ProspectRecord;

use crate::config::{RankConfig, ValueKind};

/// Strict number parse: trimmed text that is a finite float
pub fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse a draft pick, tolerating decorations around the number
pub fn parse_pick(raw: &str) -> Option<f64> {
    parse_number(raw).or_else(|| first_number(raw))
}

/// Parse a height into inches
///
/// Accepts `6'8"`, `6' 8.5"`, `6-8` and a bare number of inches.
pub fn parse_height(raw: &str) -> Option<f64> {
    let value = raw.trim();
    if let Some(inches) = parse_number(value) {
        return Some(inches);
    }

    let cleaned = value.trim_end_matches('"').trim_end_matches("''");
    let (feet, inches) = cleaned.split_once('\'').or_else(|| cleaned.split_once('-'))?;
    let feet = parse_number(feet)?;
    let inches = if inches.trim().is_empty() { 0.0 } else { parse_number(inches)? };

    Some(feet * 12.0 + inches)
}

/// Parse a weight, dropping a `lbs` / `lb` unit suffix
pub fn parse_weight(raw: &str) -> Option<f64> {
    let value = raw.trim().to_ascii_lowercase();
    let value = value.trim_end_matches('.');
    let value = value.strip_suffix("lbs").or_else(|| value.strip_suffix("lb")).unwrap_or(value);
    parse_number(value)
}

/// Parse with the parser for a value kind
pub fn parse_kind(raw: &str, kind: ValueKind) -> Option<f64> {
    match kind {
        ValueKind::Number => parse_number(raw),
        ValueKind::Pick => parse_pick(raw),
        ValueKind::Height => parse_height(raw),
        ValueKind::Weight => parse_weight(raw),
    }
}

/// First run of digits (with an optional fractional part) in the text
fn first_number(raw: &str) -> Option<f64> {
    let start = raw.find(|c: char| c.is_ascii_digit())?;
    let rest = &raw[start..];
    let end = rest.find(|c: char| !(c.is_ascii_digit() || c == '.')).unwrap_or(rest.len());
    parse_number(rest[..end].trim_end_matches('.'))
}

/// Numeric value of a column for one record, `None` when missing
///
/// Columns with a configured companion read the companion first and fall
/// back to parsing the display value.
pub fn numeric_value(record: &ProspectRecord, column: &str, config: &RankConfig) -> Option<f64> {
    if let Some(companion) = config.companion_for(column) {
        let converted = record
            .get(&companion.companion)
            .filter(|raw| !config.is_missing(raw))
            .and_then(parse_number);
        if converted.is_some() {
            return converted;
        }

        return record
            .get(column)
            .filter(|raw| !config.is_missing(raw))
            .and_then(|raw| parse_kind(raw, companion.kind));
    }

    record.get(column).filter(|raw| !config.is_missing(raw)).and_then(parse_number)
}

/// Whether a column sorts numerically over a set of records
///
/// Companion-backed columns always do. Any other column does when at least
/// one of its present values is a number; its text values then count as
/// missing.
pub fn is_numeric_column(records: &[ProspectRecord], column: &str, config: &RankConfig) -> bool {
    config.companion_for(column).is_some()
        || records.iter().any(|record| numeric_value(record, column, config).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number_is_strict() {
        assert_eq!(parse_number(" 12.5 "), Some(12.5));
        assert_eq!(parse_number("-3"), Some(-3.0));
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("N/A"), None);
        assert_eq!(parse_number("#5"), None);
    }

    #[test]
    fn test_parse_pick_decorations() {
        assert_eq!(parse_pick("5"), Some(5.0));
        assert_eq!(parse_pick("#5"), Some(5.0));
        assert_eq!(parse_pick("12 (via BOS)"), Some(12.0));
        assert_eq!(parse_pick("Undrafted"), None);
    }

    #[test]
    fn test_parse_height_formats() {
        assert_eq!(parse_height("6'8\""), Some(80.0));
        assert_eq!(parse_height("6' 8.5\""), Some(80.5));
        assert_eq!(parse_height("6-10"), Some(82.0));
        assert_eq!(parse_height("7'"), Some(84.0));
        assert_eq!(parse_height("79.25"), Some(79.25));
        assert_eq!(parse_height("tall"), None);
    }

    #[test]
    fn test_parse_weight_units() {
        assert_eq!(parse_weight("215 lbs"), Some(215.0));
        assert_eq!(parse_weight("198lb"), Some(198.0));
        assert_eq!(parse_weight("240 lbs."), Some(240.0));
        assert_eq!(parse_weight("201"), Some(201.0));
        assert_eq!(parse_weight("heavy"), None);
    }

    #[test]
    fn test_companion_takes_precedence() {
        let config = RankConfig::default();
        let record = ProspectRecord::from_pairs(&[("Height", "6'8\""), ("Height (in)", "80.25")]);
        assert_eq!(numeric_value(&record, "Height", &config), Some(80.25));

        let no_companion = ProspectRecord::from_pairs(&[("Height", "6'8\"")]);
        assert_eq!(numeric_value(&no_companion, "Height", &config), Some(80.0));

        let na_companion = ProspectRecord::from_pairs(&[("Height", "6'9\""), ("Height (in)", "N/A")]);
        assert_eq!(numeric_value(&na_companion, "Height", &config), Some(81.0));
    }

    #[test]
    fn test_missing_tokens_are_not_numbers() {
        let config = RankConfig::default();
        let record = ProspectRecord::from_pairs(&[("EPM", "NA"), ("Pick", "")]);
        assert_eq!(numeric_value(&record, "EPM", &config), None);
        assert_eq!(numeric_value(&record, "Pick", &config), None);
        assert_eq!(numeric_value(&record, "Absent", &config), None);
    }

    #[test]
    fn test_numeric_column_detection() {
        let config = RankConfig::default();
        let records = vec![
            ProspectRecord::from_pairs(&[("Name", "A"), ("EPM", "1.5")]),
            ProspectRecord::from_pairs(&[("Name", "B"), ("EPM", "TBD")]),
        ];
        assert!(is_numeric_column(&records, "EPM", &config));
        assert!(!is_numeric_column(&records, "Name", &config));
        assert!(is_numeric_column(&[], "Pick", &config));
    }
}
