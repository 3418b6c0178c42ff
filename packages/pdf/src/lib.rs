#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! PDF plaintext extraction for uploaded registrant profiles.
//!
//! Registrants upload their LinkedIn profile as a PDF export. This crate
//! pulls the plaintext out of that payload using pure-Rust text
//! extraction ([`pdf_extract`]) — the concatenation of every page's text
//! in page order, with no separator guarantees beyond that.
//!
//! [`PdfTextExtractor`] implements the
//! [`peer_match_registration::TextExtractor`] trait so it plugs straight
//! into the submission pipeline.

use peer_match_registration::{ExtractionError, TextExtractor};

/// Errors specific to PDF extraction.
#[derive(Debug, thiserror::Error)]
pub enum PdfError {
    /// The payload is not a well-formed PDF.
    #[error("PDF extraction error: {0}")]
    Extraction(String),
}

impl From<PdfError> for ExtractionError {
    fn from(e: PdfError) -> Self {
        Self {
            message: e.to_string(),
        }
    }
}

/// Extracts the plaintext of an in-memory PDF payload.
///
/// Returns an empty string for a well-formed PDF with no extractable
/// text (for example a scan made of images only); that case is not an
/// error here.
///
/// # Errors
///
/// Returns [`PdfError::Extraction`] if the payload is not a well-formed
/// PDF.
pub fn extract_text(document: &[u8]) -> Result<String, PdfError> {
    let text = pdf_extract::extract_text_from_mem(document)
        .map_err(|e| PdfError::Extraction(format!("failed to extract text from PDF: {e}")))?;

    log::debug!(
        "Extracted {} characters of text from a {} byte PDF",
        text.len(),
        document.len()
    );

    Ok(text)
}

/// [`TextExtractor`] implementation over [`extract_text`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfTextExtractor;

impl TextExtractor for PdfTextExtractor {
    fn extract(&self, document: &[u8]) -> Result<String, ExtractionError> {
        extract_text(document).map_err(Into::into)
    }
}
