#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Registration domain types for the peer-match application.
//!
//! This crate defines the canonical shapes a submission passes through:
//! the raw field values as entered ([`RawSubmission`]), the trimmed and
//! normalized values after validation ([`NormalizedSubmission`]), and the
//! final record handed to the remote store ([`RegistrationRecord`]).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Degree programs a registrant can select.
///
/// The serialized forms are the exact labels shown in the form's radio
/// group and stored in the remote table, so parsing a submitted option
/// string and rendering an option list both go through the same strings.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum Program {
    /// Master In Management
    #[serde(rename = "Master In Management")]
    #[strum(serialize = "Master In Management")]
    Management,
    /// Master in Finance
    #[serde(rename = "Master in Finance")]
    #[strum(serialize = "Master in Finance")]
    Finance,
    /// Master in Business Analytics
    #[serde(rename = "Master in Business Analytics")]
    #[strum(serialize = "Master in Business Analytics")]
    BusinessAnalytics,
    /// Master in Entrepreneurship
    #[serde(rename = "Master in Entrepreneurship")]
    #[strum(serialize = "Master in Entrepreneurship")]
    Entrepreneurship,
}

impl Program {
    /// Returns all offered programs, in the order they are presented to
    /// the registrant.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Management,
            Self::Finance,
            Self::BusinessAnalytics,
            Self::Entrepreneurship,
        ]
    }
}

/// One form cycle's field values exactly as entered, before any
/// trimming or validation.
///
/// `program` and `document` are `Option` because the radio group starts
/// with no selection and the file input starts empty; every other field
/// defaults to an empty string.
#[derive(Debug, Clone, Default)]
pub struct RawSubmission {
    /// First and last name as typed.
    pub name: String,
    /// Email address as typed.
    pub email: String,
    /// Selected program option label, if any was selected.
    pub program: Option<String>,
    /// Raw bytes of the uploaded LinkedIn profile PDF, if one was attached.
    pub document: Option<Vec<u8>>,
    /// Hobbies and interests free text.
    pub hobbies: String,
    /// Goals for the upcoming academic year free text.
    pub goals: String,
    /// Career aspirations free text.
    pub career_aspirations: String,
    /// Whether the registrant ticked the data-use consent checkbox.
    pub consent: bool,
}

/// Field values that have passed every validation rule, trimmed and
/// normalized, ready for document extraction and record assembly.
#[derive(Debug, Clone)]
pub struct NormalizedSubmission {
    /// Trimmed full name (at least two whitespace-separated tokens).
    pub name: String,
    /// Trimmed, ASCII-lowercased email address.
    pub email: String,
    /// Parsed program selection.
    pub program: Program,
    /// Raw bytes of the uploaded PDF.
    pub document: Vec<u8>,
    /// Trimmed hobbies and interests text.
    pub hobbies: String,
    /// Trimmed goals text.
    pub goals: String,
    /// Trimmed career aspirations text.
    pub career_aspirations: String,
}

/// The final structured record persisted to the remote store.
///
/// Built once per successful submission, handed to the store, then
/// dropped. Consent is a precondition for building the record and is not
/// part of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationRecord {
    /// Registrant full name.
    pub name: String,
    /// Normalized email address.
    pub email: String,
    /// Selected program.
    pub program: Program,
    /// Plaintext extracted from the uploaded PDF, in page order.
    pub profile_text: String,
    /// Hobbies and interests.
    pub hobbies: String,
    /// Goals for the upcoming academic year.
    pub goals: String,
    /// Career aspirations.
    pub career_aspirations: String,
    /// When the record was assembled.
    pub submitted_at: DateTime<Utc>,
}
