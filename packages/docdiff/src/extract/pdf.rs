//! PDF text extraction with ordered fallback strategies.
//!
//! Strategies are pure `bytes -> text` functions tried in priority
//! order; the first success wins and the last failure reason is
//! surfaced when every strategy fails.

use tracing::{debug, warn};

use crate::error::{DocdiffError, Result};
use crate::extract::DocumentFormat;

type Strategy = fn(&[u8]) -> std::result::Result<String, String>;

/// Extraction strategies, most capable first.
const STRATEGIES: &[(&str, Strategy)] = &[
    ("pdf-extract", text_layer),
    ("lopdf", page_by_page),
];

/// Extract text from a PDF, falling through the strategy chain.
pub fn extract(bytes: &[u8]) -> Result<String> {
    let mut last_reason = String::from("no strategy attempted");
    for &(name, strategy) in STRATEGIES {
        match strategy(bytes) {
            Ok(text) => {
                debug!(strategy = name, chars = text.len(), "PDF text extracted");
                return Ok(text);
            }
            Err(reason) => {
                warn!(strategy = name, %reason, "PDF strategy failed");
                last_reason = reason;
            }
        }
    }
    Err(DocdiffError::ExtractionFailed {
        format: DocumentFormat::Pdf,
        reason: last_reason,
    })
}

/// Primary strategy: whole-document text layer read.
///
/// Output is passed through unmodified, blank regions included.
fn text_layer(bytes: &[u8]) -> std::result::Result<String, String> {
    pdf_extract::extract_text_from_mem(bytes).map_err(|e| e.to_string())
}

/// Secondary strategy: per-page extraction in document order.
///
/// Pages with no extractable text contribute nothing, not even a
/// blank line.
fn page_by_page(bytes: &[u8]) -> std::result::Result<String, String> {
    let document = lopdf::Document::load_mem(bytes).map_err(|e| e.to_string())?;
    let mut pages = Vec::new();
    // get_pages returns a BTreeMap, so iteration is already in page order
    for page_number in document.get_pages().keys() {
        let text = document
            .extract_text(&[*page_number])
            .map_err(|e| e.to_string())?;
        if !text.trim().is_empty() {
            pages.push(text.trim_end().to_owned());
        }
    }
    Ok(pages.join("\n"))
}
