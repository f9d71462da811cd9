//! DOCX text extraction.
//!
//! A .docx file is a zip package; the body lives in `word/document.xml`
//! as a sequence of `w:p` paragraphs whose text sits in `w:t` runs.
//! Non-empty paragraph texts are joined with newlines in document order.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;
use zip::ZipArchive;

use crate::error::{DocdiffError, Result};
use crate::extract::DocumentFormat;

/// Extract paragraph text from a DOCX package.
pub fn extract(bytes: &[u8]) -> Result<String> {
    read_document_xml(bytes)
        .and_then(|xml| collect_paragraphs(&xml))
        .map_err(|reason| DocdiffError::ExtractionFailed {
            format: DocumentFormat::Docx,
            reason,
        })
}

fn read_document_xml(bytes: &[u8]) -> std::result::Result<String, String> {
    let mut archive = ZipArchive::new(Cursor::new(bytes)).map_err(|e| e.to_string())?;
    let mut entry = archive
        .by_name("word/document.xml")
        .map_err(|e| e.to_string())?;
    let mut xml = String::new();
    entry.read_to_string(&mut xml).map_err(|e| e.to_string())?;
    Ok(xml)
}

fn collect_paragraphs(xml: &str) -> std::result::Result<String, String> {
    let mut reader = Reader::from_str(xml);
    let mut paragraphs: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_text_run = false;

    loop {
        match reader.read_event().map_err(|e| e.to_string())? {
            Event::Start(start) if start.name().as_ref() == b"w:t" => in_text_run = true,
            Event::End(end) => match end.name().as_ref() {
                b"w:t" => in_text_run = false,
                b"w:p" => {
                    if !current.is_empty() {
                        paragraphs.push(std::mem::take(&mut current));
                    }
                }
                _ => {}
            },
            Event::Text(text) if in_text_run => {
                current.push_str(&text.unescape().map_err(|e| e.to_string())?);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs.join("\n"))
}
