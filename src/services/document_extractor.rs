//! Turns an uploaded `.txt` or `.pdf` file into plain document text.

use std::path::Path;

use lopdf::{content::Content, Document, Object, ObjectId};

use crate::errors::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    PlainText,
    Pdf,
}

impl DocumentKind {
    /// Picks the kind from the file extension; anything but `.txt` and `.pdf`
    /// is rejected.
    pub fn from_file_name(file_name: &str) -> AppResult<Self> {
        let extension = Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("txt") => Ok(DocumentKind::PlainText),
            Some("pdf") => Ok(DocumentKind::Pdf),
            _ => Err(AppError::ValidationError(
                "Only .txt and .pdf files are allowed".to_string(),
            )),
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            DocumentKind::PlainText => "text/plain",
            DocumentKind::Pdf => "application/pdf",
        }
    }
}

pub fn extract_text(kind: DocumentKind, contents: &[u8]) -> AppResult<String> {
    match kind {
        DocumentKind::PlainText => String::from_utf8(contents.to_vec()).map_err(|_| {
            AppError::ValidationError("Text file is not valid UTF-8".to_string())
        }),
        DocumentKind::Pdf => extract_pdf_text(contents),
    }
}

fn extract_pdf_text(contents: &[u8]) -> AppResult<String> {
    let doc = Document::load_mem(contents)
        .map_err(|e| AppError::ValidationError(format!("Could not read PDF: {}", e)))?;

    if doc.is_encrypted() {
        return Err(AppError::ValidationError(
            "PDF is encrypted and its text cannot be extracted".to_string(),
        ));
    }

    let pages = doc.get_pages();
    log::debug!("Extracting text from {} PDF page(s)", pages.len());

    let mut text = String::new();
    for (page_number, &page_id) in pages.iter() {
        match extract_page_text(&doc, page_id) {
            Ok(page_text) => {
                text.push_str(&page_text);
                text.push('\n');
            }
            Err(e) => log::warn!("Skipping unreadable PDF page {}: {}", page_number, e),
        }
    }

    Ok(text)
}

fn extract_page_text(doc: &Document, page_id: ObjectId) -> Result<String, lopdf::Error> {
    let content = Content::decode(&doc.get_page_content(page_id)?)?;
    let mut text = String::new();

    for operation in &content.operations {
        match operation.operator.as_str() {
            "Tj" | "TJ" | "'" | "\"" => {
                for operand in &operation.operands {
                    if let Some(s) = string_from_object(operand) {
                        text.push_str(&s);
                        text.push(' ');
                    }
                }
            }
            "Td" | "TD" | "T*" => {
                if !text.ends_with('\n') && !text.ends_with(' ') {
                    text.push('\n');
                }
            }
            _ => {}
        }
    }

    Ok(text)
}

/// Text operands are either strings or `TJ` arrays mixing strings and kerning.
fn string_from_object(obj: &Object) -> Option<String> {
    match obj {
        Object::String(bytes, _) => {
            if bytes.len() >= 2 && bytes[0] == 0xFE && bytes[1] == 0xFF {
                let utf16: Vec<u16> = bytes[2..]
                    .chunks_exact(2)
                    .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
                    .collect();
                String::from_utf16(&utf16).ok()
            } else {
                // PDFDocEncoding is close enough to Latin-1 for body text.
                Some(bytes.iter().map(|&b| b as char).collect())
            }
        }
        Object::Array(items) => {
            let joined: String = items.iter().filter_map(string_from_object).collect();
            (!joined.is_empty()).then_some(joined)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::pdf_with_text;

    #[test]
    fn kind_follows_extension_case_insensitively() {
        assert_eq!(DocumentKind::from_file_name("notes.txt").ok(), Some(DocumentKind::PlainText));
        assert_eq!(DocumentKind::from_file_name("Chapter 1.PDF").ok(), Some(DocumentKind::Pdf));
    }

    #[test]
    fn other_extensions_are_rejected() {
        for name in ["slides.pptx", "notes", "archive.txt.zip"] {
            match DocumentKind::from_file_name(name) {
                Err(AppError::ValidationError(message)) => {
                    assert_eq!(message, "Only .txt and .pdf files are allowed")
                }
                other => panic!("{name}: expected validation error, got {:?}", other),
            }
        }
    }

    #[test]
    fn plain_text_must_be_utf8() {
        assert_eq!(
            extract_text(DocumentKind::PlainText, "Café notes".as_bytes()).ok(),
            Some("Café notes".to_string())
        );
        assert!(matches!(
            extract_text(DocumentKind::PlainText, &[0xff, 0xfe, 0x00]),
            Err(AppError::ValidationError(_))
        ));
    }

    #[test]
    fn pdf_text_is_extracted() {
        let pdf = pdf_with_text("Photosynthesis converts light into chemical energy.");

        let text = extract_text(DocumentKind::Pdf, &pdf).expect("pdf should be readable");

        assert!(text.contains("Photosynthesis converts light into chemical energy."));
    }

    #[test]
    fn garbage_is_not_a_pdf() {
        assert!(matches!(
            extract_text(DocumentKind::Pdf, b"definitely not a pdf"),
            Err(AppError::ValidationError(_))
        ));
    }

    #[test]
    fn tj_arrays_are_joined() {
        let operand = Object::Array(vec![
            Object::string_literal("Hel"),
            Object::Integer(-120),
            Object::string_literal("lo"),
        ]);
        assert_eq!(string_from_object(&operand), Some("Hello".to_string()));
    }
}
