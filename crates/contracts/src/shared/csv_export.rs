//! Record-to-CSV serializer used by every table export.
//!
//! Comma separated, every field wrapped in double quotes, quotes inside a
//! value doubled. The header row is taken from the field names of the first
//! record. Records must be flat structs.

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CsvExportError {
    #[error("Keine Daten für den Export vorhanden")]
    NoData,
    #[error("CSV konnte nicht erzeugt werden: {0}")]
    Write(#[from] csv::Error),
    #[error("CSV ist kein gültiges UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

pub fn to_csv<T: Serialize>(records: &[T]) -> Result<String, CsvExportError> {
    if records.is_empty() {
        return Err(CsvExportError::NoData);
    }

    let mut writer = csv::WriterBuilder::new()
        .delimiter(b',')
        .quote_style(csv::QuoteStyle::Always)
        .terminator(csv::Terminator::Any(b'\n'))
        .has_headers(true)
        .from_writer(Vec::new());

    for record in records {
        writer.serialize(record)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| CsvExportError::Write(e.into_error().into()))?;
    Ok(String::from_utf8(bytes)?)
}

/// File name with a date suffix, e.g. `rechnungen_2026-10-19.csv`
pub fn export_file_name(prefix: &str, date: chrono::NaiveDate) -> String {
    format!("{}_{}.csv", prefix, date.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Row {
        nummer: String,
        betrag: f64,
        bezahlt: bool,
    }

    fn rows(n: usize) -> Vec<Row> {
        (0..n)
            .map(|i| Row {
                nummer: format!("R-{}", i),
                betrag: i as f64 * 10.5,
                bezahlt: i % 2 == 0,
            })
            .collect()
    }

    #[test]
    fn test_header_plus_one_line_per_record() {
        for n in [1, 3, 17] {
            let csv = to_csv(&rows(n)).unwrap();
            assert_eq!(csv.lines().count(), n + 1);
        }
    }

    #[test]
    fn test_every_value_is_quoted() {
        let csv = to_csv(&rows(1)).unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some(r#""nummer","betrag","bezahlt""#));
        assert_eq!(lines.next(), Some(r#""R-0","0.0","true""#));
    }

    #[test]
    fn test_internal_quotes_are_escaped() {
        let data = vec![Row {
            nummer: r#"Modul "Premium", 400W"#.to_string(),
            betrag: 1.0,
            bezahlt: false,
        }];
        let csv = to_csv(&data).unwrap();
        assert!(csv.contains(r#""Modul ""Premium"", 400W""#));
    }

    #[test]
    fn test_empty_list_is_refused() {
        let empty: Vec<Row> = Vec::new();
        assert!(matches!(to_csv(&empty), Err(CsvExportError::NoData)));
    }

    #[test]
    fn test_export_file_name() {
        let date = chrono::NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        assert_eq!(export_file_name("vertraege", date), "vertraege_2026-10-19.csv");
    }
}
