//! PDF text extraction.
//!
//! Pages are read in page-number order. A page whose text cannot be decoded (scanned
//! images, exotic font encodings) contributes an empty string instead of failing the
//! whole document; only a document that cannot be opened at all is an error.

use itertools::Itertools;
use lopdf::Document;

use crate::SourceError;

/// Extracts the text of every page of the PDF in `bytes`, one entry per page
#[tracing::instrument(skip(bytes), fields(size = bytes.len()))]
pub fn extract_pdf_pages(bytes: &[u8]) -> Result<Vec<String>, SourceError> {
    let document = Document::load_mem(bytes)
        .inspect_err(|e| tracing::error!(error = %e, "Failed to open PDF document"))?;

    let pages = document
        .get_pages()
        .into_keys()
        .map(|page_number| {
            document
                .extract_text(&[page_number])
                .inspect_err(|e| {
                    tracing::debug!(page_number, error = %e, "Page yielded no extractable text")
                })
                .unwrap_or_default()
        })
        .collect::<Vec<_>>();

    tracing::debug!(pages = pages.len(), "Extracted PDF pages");
    Ok(pages)
}

/// Extracts the text of the whole document, pages joined with single spaces
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String, SourceError> {
    Ok(extract_pdf_pages(bytes)?.iter().join(" "))
}
