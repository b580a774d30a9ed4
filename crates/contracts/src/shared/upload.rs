use thiserror::Error;

pub const CSV_MIME: &str = "text/csv";

/// Smart meter exports are small; anything above this is a wrong file
pub const MAX_UPLOAD_BYTES: f64 = 10.0 * 1024.0 * 1024.0;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum UploadError {
    #[error("Bitte wählen Sie eine Datei aus")]
    NoFile,
    #[error("Nur CSV-Dateien sind erlaubt (erhalten: {0})")]
    WrongType(String),
    #[error("Die Datei ist leer")]
    Empty,
    #[error("Die Datei ist zu groß (maximal 10 MB)")]
    TooLarge,
}

/// Check the file picked by the user before it is sent as multipart data.
/// `mime` is the browser-reported type; parameters such as `charset` are ignored.
pub fn validate_csv_upload(mime: Option<&str>, size_bytes: f64) -> Result<(), UploadError> {
    let mime = mime.ok_or(UploadError::NoFile)?;
    let essence = mime.split(';').next().unwrap_or("").trim().to_ascii_lowercase();
    if essence != CSV_MIME {
        return Err(UploadError::WrongType(mime.to_string()));
    }
    if size_bytes <= 0.0 {
        return Err(UploadError::Empty);
    }
    if size_bytes > MAX_UPLOAD_BYTES {
        return Err(UploadError::TooLarge);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_csv() {
        assert_eq!(validate_csv_upload(Some("text/csv"), 120.0), Ok(()));
        assert_eq!(validate_csv_upload(Some("text/csv; charset=utf-8"), 120.0), Ok(()));
    }

    #[test]
    fn test_rejects_other_types() {
        assert_eq!(
            validate_csv_upload(Some("application/vnd.ms-excel"), 120.0),
            Err(UploadError::WrongType("application/vnd.ms-excel".to_string()))
        );
        assert_eq!(validate_csv_upload(None, 0.0), Err(UploadError::NoFile));
    }

    #[test]
    fn test_rejects_empty_and_large() {
        assert_eq!(validate_csv_upload(Some("text/csv"), 0.0), Err(UploadError::Empty));
        assert_eq!(
            validate_csv_upload(Some("text/csv"), MAX_UPLOAD_BYTES + 1.0),
            Err(UploadError::TooLarge)
        );
    }
}
