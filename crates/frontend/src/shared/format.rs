//! Display formatting in German notation

use chrono::{DateTime, NaiveDate, Utc};

pub fn format_date(date: &NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

pub fn format_datetime(value: &DateTime<Utc>) -> String {
    value.format("%d.%m.%Y %H:%M").to_string()
}

/// ISO date or datetime string from the backend to `dd.mm.yyyy`.
/// Anything unparsable is returned unchanged.
pub fn format_iso_date(value: &str) -> String {
    let date_part = value.split('T').next().unwrap_or(value);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map(|d| format_date(&d))
        .unwrap_or_else(|_| value.to_string())
}

/// Number with `.` thousands separators and `,` decimal comma
pub fn format_number(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i.to_string(), Some(f.to_string())),
        None => (formatted, None),
    };

    let mut grouped = String::new();
    for (idx, ch) in int_part.chars().enumerate() {
        if idx > 0 && (int_part.len() - idx) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && value.abs() >= 0.5 * 10f64.powi(-(decimals as i32)) {
        "-"
    } else {
        ""
    };
    match frac_part {
        Some(frac) => format!("{}{},{}", sign, grouped, frac),
        None => format!("{}{}", sign, grouped),
    }
}

pub fn format_eur(value: f64) -> String {
    format!("{} €", format_number(value, 2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(1234567.891, 2), "1.234.567,89");
        assert_eq!(format_number(999.0, 0), "999");
        assert_eq!(format_number(-1500.5, 1), "-1.500,5");
        assert_eq!(format_number(-0.001, 2), "0,00");
    }

    #[test]
    fn test_format_eur() {
        assert_eq!(format_eur(18000.0), "18.000,00 €");
    }

    #[test]
    fn test_format_iso_date() {
        assert_eq!(format_iso_date("2026-03-15"), "15.03.2026");
        assert_eq!(format_iso_date("2026-03-15T14:02:26Z"), "15.03.2026");
        assert_eq!(format_iso_date("gestern"), "gestern");
    }
}
