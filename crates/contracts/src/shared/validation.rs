//! Schema-style validation for dashboard forms.
//!
//! Every form keeps its raw input as strings. `FormValidate::validate` turns
//! the raw input into the DTO sent to the backend or returns the errors keyed
//! by field name, so the UI can render them next to the offending input.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Validation rules for a single field
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
}

impl ValidationRules {
    pub const fn none() -> Self {
        Self {
            required: false,
            min: None,
            max: None,
            min_length: None,
            max_length: None,
        }
    }

    pub const fn required() -> Self {
        Self {
            required: true,
            min: None,
            max: None,
            min_length: None,
            max_length: None,
        }
    }

    pub const fn with_min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub const fn with_max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    pub const fn with_max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Validate a string value against the rules
    pub fn validate_string(&self, value: &str, field_label: &str) -> Result<(), String> {
        if self.required && value.trim().is_empty() {
            return Err(format!("{} ist ein Pflichtfeld", field_label));
        }

        let len = value.trim().chars().count();
        if let Some(min) = self.min_length {
            if len < min {
                return Err(format!(
                    "{} muss mindestens {} Zeichen enthalten",
                    field_label, min
                ));
            }
        }

        if let Some(max) = self.max_length {
            if len > max {
                return Err(format!(
                    "{} darf höchstens {} Zeichen enthalten",
                    field_label, max
                ));
            }
        }

        Ok(())
    }

    /// Validate a numeric value against min/max rules
    pub fn validate_number(&self, value: f64, field_label: &str) -> Result<(), String> {
        if let Some(min) = self.min {
            if value < min {
                return Err(format!("{} muss mindestens {} sein", field_label, min));
            }
        }

        if let Some(max) = self.max {
            if value > max {
                return Err(format!("{} darf höchstens {} sein", field_label, max));
            }
        }

        Ok(())
    }

    /// Parse and range-check a decimal input
    pub fn validate_decimal(&self, raw: &str, field_label: &str) -> Result<f64, String> {
        self.validate_string(raw, field_label)?;
        let value = parse_decimal(raw).ok_or_else(|| format!("{} muss eine Zahl sein", field_label))?;
        self.validate_number(value, field_label)?;
        Ok(value)
    }

    /// Parse and range-check an integer input
    pub fn validate_integer(&self, raw: &str, field_label: &str) -> Result<i64, String> {
        self.validate_string(raw, field_label)?;
        let value = raw
            .trim()
            .parse::<i64>()
            .map_err(|_| format!("{} muss eine ganze Zahl sein", field_label))?;
        self.validate_number(value as f64, field_label)?;
        Ok(value)
    }
}

/// Parse a number typed by a German speaking user. `1.234,5`, `18.000` and
/// `1234.5` are accepted; a dot followed by groups of exactly three digits is
/// a thousands separator. A comma is the decimal separator and may appear
/// once, after the grouped integer part. Exponents and anything else are
/// rejected.
pub fn parse_decimal(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    let (sign, body) = match trimmed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", trimmed),
    };
    if body.is_empty() || !body.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',') {
        return None;
    }

    let normalized = match body.split_once(',') {
        Some((int_part, fraction)) => {
            if fraction.is_empty() || !fraction.chars().all(|c| c.is_ascii_digit()) {
                return None;
            }
            let digits = if int_part.contains('.') {
                if !is_thousands_grouped(int_part) {
                    return None;
                }
                int_part.replace('.', "")
            } else {
                int_part.to_string()
            };
            if digits.is_empty() {
                return None;
            }
            format!("{}.{}", digits, fraction)
        }
        None if is_thousands_grouped(body) => body.replace('.', ""),
        None => body.to_string(),
    };

    format!("{}{}", sign, normalized)
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

fn is_thousands_grouped(value: &str) -> bool {
    let digits = value.strip_prefix('-').unwrap_or(value);
    let mut groups = digits.split('.');
    let head_ok = groups
        .next()
        .map(|g| {
            (1..=3).contains(&g.len())
                && !g.starts_with('0')
                && g.chars().all(|c| c.is_ascii_digit())
        })
        .unwrap_or(false);
    let mut tail = groups.peekable();
    let has_tail = tail.peek().is_some();
    head_ok && has_tail && tail.all(|g| g.len() == 3 && g.chars().all(|c| c.is_ascii_digit()))
}

/// Parse an ISO date as produced by `<input type="date">`
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// Trimmed text, `None` when blank
pub fn optional_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Field errors keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_map(map: BTreeMap<String, String>) -> Self {
        Self(map)
    }

    pub fn insert(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_string()).or_insert_with(|| message.into());
    }

    /// Record the error of a single field check and return the parsed value
    pub fn check<T>(&mut self, field: &str, result: Result<T, String>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(message) => {
                self.insert(field, message);
                None
            }
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.0.iter()
    }
}

/// Raw form input that validates into a request DTO
pub trait FormValidate {
    type Output;

    fn validate(&self) -> Result<Self::Output, FieldErrors>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decimal_formats() {
        assert_eq!(parse_decimal("9,8"), Some(9.8));
        assert_eq!(parse_decimal("1.234,5"), Some(1234.5));
        assert_eq!(parse_decimal("12.5"), Some(12.5));
        assert_eq!(parse_decimal("18.000"), Some(18000.0));
        assert_eq!(parse_decimal("1.250.000"), Some(1250000.0));
        assert_eq!(parse_decimal("0.125"), Some(0.125));
        assert_eq!(parse_decimal("zehn"), None);
        assert_eq!(parse_decimal("  "), None);
        assert_eq!(parse_decimal("NaN"), None);
    }

    #[test]
    fn test_mixed_separators_must_follow_german_grouping() {
        assert_eq!(parse_decimal("1,234.50"), None);
        assert_eq!(parse_decimal("1,2,3"), None);
        assert_eq!(parse_decimal("12.34,5"), None);
        assert_eq!(parse_decimal("1.234.567,89"), Some(1234567.89));
        assert_eq!(parse_decimal("-1.234,5"), Some(-1234.5));
        assert_eq!(parse_decimal(",5"), None);
        assert_eq!(parse_decimal("5,"), None);
        assert_eq!(
            ValidationRules::required().validate_decimal("1,234.50", "Kosten"),
            Err("Kosten muss eine Zahl sein".to_string())
        );
    }

    #[test]
    fn test_exponent_and_grouped_three_decimals() {
        assert_eq!(parse_decimal("1e3"), None);
        assert_eq!(parse_decimal("1E3"), None);
        // German reading: the dot groups thousands
        assert_eq!(parse_decimal("12.500"), Some(12500.0));
        assert_eq!(parse_decimal("12,500"), Some(12.5));
    }

    #[test]
    fn test_required_rule() {
        let rules = ValidationRules::required();
        assert!(rules.validate_string("  ", "Modultyp").is_err());
        assert!(rules.validate_string("Mono 400", "Modultyp").is_ok());
    }

    #[test]
    fn test_decimal_range() {
        let rules = ValidationRules::required().with_min(0.5).with_max(100.0);
        assert_eq!(rules.validate_decimal("10", "Leistung"), Ok(10.0));
        assert!(rules.validate_decimal("0,1", "Leistung").is_err());
        assert_eq!(
            rules.validate_decimal("viel", "Leistung"),
            Err("Leistung muss eine Zahl sein".to_string())
        );
    }

    #[test]
    fn test_first_error_per_field_wins() {
        let mut errors = FieldErrors::new();
        errors.insert("kosten", "erste");
        errors.insert("kosten", "zweite");
        assert_eq!(errors.get("kosten"), Some("erste"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2026-05-04"),
            NaiveDate::from_ymd_opt(2026, 5, 4)
        );
        assert_eq!(parse_date("04.05.2026"), None);
    }
}
