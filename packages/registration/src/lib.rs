#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Submission validation and processing pipeline for peer-match.
//!
//! The pipeline is a straight line: [`validate::validate`] turns a
//! `RawSubmission` into a `NormalizedSubmission` (or a full list of field
//! errors), [`process::process`] then extracts the PDF text, assembles a
//! `RegistrationRecord`, and hands it to the remote store.
//!
//! The two external collaborators sit behind traits defined here:
//! [`TextExtractor`] (implemented by `peer_match_pdf`) and [`RecordSink`]
//! (implemented by `peer_match_airtable`), so the pipeline itself stays
//! free of HTTP and PDF concerns and is testable with in-memory fakes.

pub mod process;
pub mod validate;

use async_trait::async_trait;
use peer_match_registration_models::RegistrationRecord;
use thiserror::Error;

/// Errors that can occur while handling one submission.
///
/// Each variant maps to a distinct user-facing outcome; none of them is
/// retried automatically.
#[derive(Debug, Error)]
pub enum RegistrationError {
    /// One or more fields failed validation. The messages are in field
    /// declaration order and cover every violated rule, not just the
    /// first.
    #[error("one or more fields failed validation")]
    Validation(Vec<String>),

    /// The uploaded payload was not a well-formed PDF.
    #[error("PDF processing error: {0}")]
    Extraction(String),

    /// The PDF was well-formed but yielded no extractable text.
    #[error("the uploaded PDF contains no readable text")]
    EmptyDocument,

    /// Persisting the record to the remote store failed.
    #[error("remote store error: {0}")]
    RemoteStore(String),
}

/// Error returned by a [`TextExtractor`] when the payload is not a
/// well-formed document.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ExtractionError {
    /// Description of what went wrong.
    pub message: String,
}

/// Error returned by a [`RecordSink`] when an insert fails.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct SinkError {
    /// Description of the network, auth, or remote-side failure.
    pub message: String,
}

/// Extracts plaintext from an uploaded document payload.
///
/// Returns the concatenation of every page's extractable text in page
/// order. A well-formed document with no extractable text (for example
/// image-only pages) yields `Ok` with an empty string; deciding whether
/// that is acceptable is the caller's job.
pub trait TextExtractor: Send + Sync {
    /// Extracts the document's text.
    ///
    /// # Errors
    ///
    /// Returns an [`ExtractionError`] if the payload is not a well-formed
    /// document of the expected format.
    fn extract(&self, document: &[u8]) -> Result<String, ExtractionError>;
}

/// Appends registration records to a remote tabular store.
///
/// The store is a pure append-only sink: no uniqueness constraint, no
/// dedup, no read-back. Inserting the same record twice creates two rows.
#[async_trait]
pub trait RecordSink: Send + Sync {
    /// Inserts one record.
    ///
    /// # Errors
    ///
    /// Returns a [`SinkError`] on any network, auth, or remote-side
    /// failure. The insert is not retried.
    async fn insert(&self, record: &RegistrationRecord) -> Result<(), SinkError>;
}
