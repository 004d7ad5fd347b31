// Document Input
// Extracts plain text from .txt/.md, .docx and .pdf inputs

use regex::Regex;
use std::io::{Cursor, Read};
use std::path::Path;
use std::sync::OnceLock;
use thiserror::Error;
use tracing::info;

use crate::services::text_processor::normalize_punctuation;

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Unsupported file type: {0}")]
    UnsupportedType(String),
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("File is not valid UTF-8 text")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
    #[error("Invalid docx archive: {0}")]
    Archive(#[from] zip::result::ZipError),
    #[error("Failed to read docx body: {0}")]
    ArchiveEntry(#[source] std::io::Error),
    #[error("PDF extraction failed: {0}")]
    Pdf(String),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum DocumentKind {
    PlainText,
    Docx,
    Pdf,
}

impl DocumentKind {
    /// Infer the kind from a file name; files without an extension are plain text.
    pub fn from_file_name(file_name: &str) -> Result<Self, DocumentError> {
        let ext = Path::new(file_name)
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase());
        match ext.as_deref() {
            None | Some("txt") | Some("md") | Some("text") => Ok(Self::PlainText),
            Some("docx") => Ok(Self::Docx),
            Some("pdf") => Ok(Self::Pdf),
            Some(other) => Err(DocumentError::UnsupportedType(other.to_string())),
        }
    }
}

fn paragraph_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)<w:p[ >].*?</w:p>").expect("docx paragraph regex"))
}

fn text_run_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<w:t(?:\s[^>]*)?>([^<]*)</w:t>").expect("docx text run regex"))
}

fn decode_xml_entities(s: &str) -> String {
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

/// Paragraph text from a WordprocessingML body, paragraphs separated by blank lines.
pub fn docx_xml_to_text(xml: &str) -> String {
    paragraph_re()
        .find_iter(xml)
        .map(|para| {
            text_run_re()
                .captures_iter(para.as_str())
                .filter_map(|c| c.get(1))
                .map(|m| decode_xml_entities(m.as_str()))
                .collect::<String>()
        })
        .filter(|p| !p.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn extract_docx(bytes: Vec<u8>) -> Result<String, DocumentError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;
    let mut body = archive.by_name("word/document.xml")?;
    let mut xml = String::new();
    body.read_to_string(&mut xml)
        .map_err(DocumentError::ArchiveEntry)?;
    Ok(docx_xml_to_text(&xml))
}

/// Extract normalized plain text from raw file bytes.
pub fn extract_text(file_name: &str, bytes: Vec<u8>) -> Result<String, DocumentError> {
    let kind = DocumentKind::from_file_name(file_name)?;
    let byte_len = bytes.len();
    let raw = match kind {
        DocumentKind::PlainText => String::from_utf8(bytes)?,
        DocumentKind::Docx => extract_docx(bytes)?,
        DocumentKind::Pdf => pdf_extract::extract_text_from_mem(&bytes)
            .map_err(|e| DocumentError::Pdf(e.to_string()))?,
    };

    let text = normalize_punctuation(&raw);
    info!(
        file = file_name,
        kind = ?kind,
        bytes = byte_len,
        chars = text.chars().count(),
        "document.extracted"
    );
    Ok(text)
}

/// Read and extract a document from disk.
pub fn load_document(path: &Path) -> Result<String, DocumentError> {
    let bytes = std::fs::read(path).map_err(|source| DocumentError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let file_name = path
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "input.txt".to_string());
    extract_text(&file_name, bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_kind_from_file_name() {
        assert_eq!(DocumentKind::from_file_name("a.TXT").unwrap(), DocumentKind::PlainText);
        assert_eq!(DocumentKind::from_file_name("notes").unwrap(), DocumentKind::PlainText);
        assert_eq!(DocumentKind::from_file_name("essay.docx").unwrap(), DocumentKind::Docx);
        assert_eq!(DocumentKind::from_file_name("paper.pdf").unwrap(), DocumentKind::Pdf);
        assert!(matches!(
            DocumentKind::from_file_name("image.png"),
            Err(DocumentError::UnsupportedType(ext)) if ext == "png"
        ));
    }

    #[test]
    fn test_plain_text_is_normalized() {
        let text = extract_text("a.txt", "  \u{201c}Hi\u{201d}\r\nthere  ".as_bytes().to_vec()).unwrap();
        assert_eq!(text, "\"Hi\"\nthere");
    }

    #[test]
    fn test_invalid_utf8() {
        assert!(matches!(
            extract_text("a.txt", vec![0xff, 0xfe, 0x00]),
            Err(DocumentError::InvalidUtf8(_))
        ));
    }

    #[test]
    fn test_docx_xml_to_text() {
        let xml = r#"<w:document><w:body>
            <w:p w:rsidR="1"><w:pPr><w:pStyle w:val="Title"/></w:pPr><w:r><w:t>Hello</w:t></w:r><w:r><w:t xml:space="preserve"> world &amp; more</w:t></w:r></w:p>
            <w:p><w:r><w:tab/><w:t>Second</w:t></w:r></w:p>
            <w:p/>
            <w:p><w:r><w:t>   </w:t></w:r></w:p>
        </w:body></w:document>"#;
        assert_eq!(docx_xml_to_text(xml), "Hello world & more\n\nSecond");
    }

    #[test]
    fn test_docx_roundtrip_through_zip() {
        let mut buf = Cursor::new(Vec::new());
        {
            let mut writer = zip::ZipWriter::new(&mut buf);
            let options = zip::write::SimpleFileOptions::default();
            writer.start_file("word/document.xml", options).unwrap();
            writer
                .write_all(b"<w:body><w:p><w:r><w:t>It is fine.</w:t></w:r></w:p></w:body>")
                .unwrap();
            writer.finish().unwrap();
        }
        let text = extract_text("x.docx", buf.into_inner()).unwrap();
        assert_eq!(text, "It is fine.");
    }

    #[test]
    fn test_not_a_zip() {
        assert!(matches!(
            extract_text("x.docx", b"plain bytes".to_vec()),
            Err(DocumentError::Archive(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let path = std::env::temp_dir().join(format!("missing-{}.txt", uuid::Uuid::new_v4()));
        assert!(matches!(load_document(&path), Err(DocumentError::Io { .. })));
    }
}
