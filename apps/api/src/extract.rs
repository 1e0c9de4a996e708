//! Document text extraction: PDF via `pdf-extract`, DOCX via `docx-rs`,
//! dispatched on file extension. Pure function of file bytes to text.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// File extensions the scanner accepts for upload and extraction.
pub const SUPPORTED_EXTENSIONS: [&str; 2] = ["pdf", "docx"];

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("unsupported file format: .{0}")]
    UnsupportedFormat(String),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("PDF extraction failed: {0}")]
    Pdf(String),

    #[error("DOCX extraction failed: {0}")]
    Docx(String),
}

/// Returns the normalized extension when the filename names a supported
/// document format.
pub fn supported_extension(filename: &str) -> Option<String> {
    let extension = Path::new(filename)
        .extension()?
        .to_str()?
        .to_ascii_lowercase();
    SUPPORTED_EXTENSIONS
        .contains(&extension.as_str())
        .then_some(extension)
}

/// Extracts plain text from a stored resume file.
///
/// Fails with `UnsupportedFormat` for anything other than PDF/DOCX, and with
/// a format-specific error for corrupt or unreadable files. The caller
/// decides how a failed resume affects the rest of the batch.
pub fn extract_text(path: &Path) -> Result<String, ExtractError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "pdf" => extract_pdf(path),
        "docx" => extract_docx(path),
        other => Err(ExtractError::UnsupportedFormat(other.to_string())),
    }
}

fn read_bytes(path: &Path) -> Result<Vec<u8>, ExtractError> {
    std::fs::read(path).map_err(|source| ExtractError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn extract_pdf(path: &Path) -> Result<String, ExtractError> {
    let data = read_bytes(path)?;
    pdf_extract::extract_text_from_mem(&data).map_err(|e| ExtractError::Pdf(e.to_string()))
}

fn extract_docx(path: &Path) -> Result<String, ExtractError> {
    use docx_rs::{DocumentChild, ParagraphChild, RunChild};

    let data = read_bytes(path)?;
    let docx = docx_rs::read_docx(&data).map_err(|e| ExtractError::Docx(e.to_string()))?;

    // Collect the text runs of every paragraph, one line per paragraph.
    let mut paragraphs: Vec<String> = Vec::new();
    for child in docx.document.children.iter() {
        if let DocumentChild::Paragraph(para) = child {
            let para_text: String = para
                .children
                .iter()
                .filter_map(|pc| {
                    if let ParagraphChild::Run(run) = pc {
                        Some(
                            run.children
                                .iter()
                                .filter_map(|rc| {
                                    if let RunChild::Text(t) = rc {
                                        Some(t.text.clone())
                                    } else {
                                        None
                                    }
                                })
                                .collect::<Vec<_>>()
                                .join(""),
                        )
                    } else {
                        None
                    }
                })
                .collect::<Vec<_>>()
                .join("");

            if !para_text.is_empty() {
                paragraphs.push(para_text);
            }
        }
    }

    Ok(paragraphs.join("\n"))
}
