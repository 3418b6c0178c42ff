#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the peer-match server.
//!
//! These types are serialized to JSON for the registration API. They are
//! separate from the domain types so the API contract can evolve
//! independently of the pipeline.

use serde::{Deserialize, Serialize};

/// One submitted registration form, as posted by the form page.
///
/// The uploaded PDF travels base64-encoded inside the JSON body; the
/// form page encodes it client-side. Every field defaults so that an
/// empty submission reaches the validator (which reports every missing
/// field at once) instead of failing JSON deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegisterRequest {
    /// First and last name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Selected program label, if any.
    pub program: Option<String>,
    /// Base64-encoded PDF payload, if a file was attached.
    pub document_base64: Option<String>,
    /// Hobbies and interests free text.
    pub hobbies: String,
    /// Goals free text.
    pub goals: String,
    /// Career aspirations free text.
    pub career_aspirations: String,
    /// Data-use consent checkbox state.
    pub consent: bool,
}

/// Successful registration response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    /// Confirmation message to display.
    pub message: String,
}

/// Error response body for every failure mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Human-readable description of the failure.
    pub error: String,
    /// Per-field validation messages, in field declaration order.
    /// Empty for non-validation failures.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub field_errors: Vec<String>,
}

impl ApiError {
    /// Creates an error body with no field breakdown.
    #[must_use]
    pub fn new(error: &str) -> Self {
        Self {
            error: error.to_owned(),
            field_errors: Vec::new(),
        }
    }
}

/// Health check response.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    /// Whether the service is healthy.
    pub healthy: bool,
    /// Service version.
    pub version: String,
}
