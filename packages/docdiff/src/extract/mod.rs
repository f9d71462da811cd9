//! Text extraction from uploaded files.
//!
//! The format is a closed set decided once from the filename suffix;
//! no content sniffing is attempted. A file named `.pdf` that is really
//! plain text fails the PDF strategy chain rather than falling back to
//! UTF-8 decoding.

use std::fmt;

use crate::error::{DocdiffError, Result};

pub mod docx;
pub mod pdf;

/// Supported document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
    /// Anything without a recognized suffix is treated as UTF-8 text.
    PlainText,
}

impl DocumentFormat {
    /// Decide the format from the filename suffix, case-insensitively.
    pub fn from_filename(filename: &str) -> Self {
        let lower = filename.to_ascii_lowercase();
        if lower.ends_with(".pdf") {
            Self::Pdf
        } else if lower.ends_with(".docx") {
            Self::Docx
        } else {
            Self::PlainText
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pdf => f.write_str("PDF"),
            Self::Docx => f.write_str("DOCX"),
            Self::PlainText => f.write_str("plain text"),
        }
    }
}

/// Extract plain text from an upload.
///
/// Pure: never touches storage, purely a function of the input bytes.
pub fn extract(filename: &str, bytes: &[u8]) -> Result<String> {
    match DocumentFormat::from_filename(filename) {
        DocumentFormat::Pdf => pdf::extract(bytes),
        DocumentFormat::Docx => docx::extract(bytes),
        DocumentFormat::PlainText => std::str::from_utf8(bytes).map(str::to_owned).map_err(|e| {
            DocdiffError::UnsupportedFormat {
                filename: filename.to_owned(),
                reason: format!("not valid UTF-8 text: {e}"),
            }
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_suffix_case_insensitive() {
        assert_eq!(DocumentFormat::from_filename("a.pdf"), DocumentFormat::Pdf);
        assert_eq!(DocumentFormat::from_filename("A.PDF"), DocumentFormat::Pdf);
        assert_eq!(
            DocumentFormat::from_filename("report.DocX"),
            DocumentFormat::Docx
        );
        assert_eq!(
            DocumentFormat::from_filename("notes.txt"),
            DocumentFormat::PlainText
        );
        assert_eq!(
            DocumentFormat::from_filename("no_suffix"),
            DocumentFormat::PlainText
        );
    }

    #[test]
    fn test_plain_text_decodes_exactly() {
        let text = extract("report.txt", "Hello\nWorld".as_bytes()).unwrap();
        assert_eq!(text, "Hello\nWorld");
    }

    #[test]
    fn test_plain_text_rejects_invalid_utf8() {
        let err = extract("blob.bin", &[0xff, 0xfe, 0x00, 0x48]).unwrap_err();
        match err {
            DocdiffError::UnsupportedFormat { filename, reason } => {
                assert_eq!(filename, "blob.bin");
                assert!(reason.contains("UTF-8"));
            }
            other => panic!("expected UnsupportedFormat, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_text_file_is_valid() {
        assert_eq!(extract("empty.txt", b"").unwrap(), "");
    }

    #[test]
    fn test_misnamed_pdf_does_not_fall_back_to_text() {
        // Declared format wins: valid UTF-8 under a .pdf suffix still goes
        // down the PDF strategy chain and fails there.
        let err = extract("actually_text.pdf", b"just some prose").unwrap_err();
        assert!(matches!(
            err,
            DocdiffError::ExtractionFailed {
                format: DocumentFormat::Pdf,
                ..
            }
        ));
    }
}
