//! Document text extraction — the file-format collaborator in front of
//! the matching core. The core only ever sees plain text.

use tracing::debug;

use crate::errors::AppError;

/// Extracts plain text from an uploaded document, routed by filename
/// extension: PDF via pdf-extract, everything else treated as UTF-8 text.
pub fn extract_text(data: &[u8], filename: &str) -> Result<String, AppError> {
    let lower = filename.to_lowercase();

    if lower.ends_with(".pdf") {
        let text = pdf_extract::extract_text_from_mem(data)
            .map_err(|e| AppError::Extraction(format!("failed to extract PDF text: {e}")))?;
        debug!(filename, chars = text.len(), "extracted PDF text");
        return Ok(text);
    }

    if lower.ends_with(".docx") || lower.ends_with(".doc") {
        return Err(AppError::Validation(
            "Word documents are not supported; upload PDF or plain text".to_string(),
        ));
    }

    debug!(filename, bytes = data.len(), "treating upload as plain text");
    Ok(String::from_utf8_lossy(data).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_passes_through() {
        let text = extract_text(b"Python developer resume", "resume.txt").unwrap();
        assert_eq!(text, "Python developer resume");
    }

    #[test]
    fn test_unknown_extension_treated_as_text() {
        let text = extract_text(b"some resume body", "resume").unwrap();
        assert_eq!(text, "some resume body");
    }

    #[test]
    fn test_invalid_utf8_is_lossy_not_fatal() {
        let text = extract_text(&[0x66, 0xff, 0x6f], "resume.txt").unwrap();
        assert!(text.contains('f'));
        assert!(text.contains('o'));
    }

    #[test]
    fn test_docx_is_rejected() {
        let err = extract_text(b"PK...", "resume.docx").unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_garbage_pdf_is_an_extraction_error() {
        let err = extract_text(b"not a real pdf", "resume.pdf").unwrap_err();
        assert!(matches!(err, AppError::Extraction(_)));
    }
}
