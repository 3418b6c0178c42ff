#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Airtable record sink for peer-match registrations.
//!
//! Airtable is used purely as an append-only table: each successful
//! submission becomes one `POST /v0/{base}/{table}` call creating one
//! row. No read-back, no update, no uniqueness constraint — inserting
//! the same record twice creates two rows.
//!
//! [`AirtableClient`] implements the
//! [`peer_match_registration::RecordSink`] trait so the pipeline never
//! sees HTTP details.

use async_trait::async_trait;
use peer_match_registration::{RecordSink, SinkError};
use peer_match_registration_models::RegistrationRecord;
use serde::{Deserialize, Serialize};

/// Format of the `Date` column value, e.g. `2026-08-30 14:05:09`.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Errors that can occur talking to Airtable.
#[derive(Debug, thiserror::Error)]
pub enum AirtableError {
    /// An HTTP request failed before a response was received.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Airtable answered with a non-success status.
    #[error("Airtable error: {message}")]
    Api {
        /// The remote error description.
        message: String,
    },

    /// A required configuration value is missing.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the missing value.
        message: String,
    },
}

impl From<AirtableError> for SinkError {
    fn from(e: AirtableError) -> Self {
        Self {
            message: e.to_string(),
        }
    }
}

/// Access configuration for one Airtable table.
///
/// Assembled once at startup and passed into [`AirtableClient::new`];
/// nothing in the crate reads the environment after that.
#[derive(Debug, Clone)]
pub struct AirtableConfig {
    /// Personal access token used as a bearer token.
    pub token: String,
    /// Base identifier (`app...`).
    pub base_id: String,
    /// Table name within the base.
    pub table_name: String,
}

impl AirtableConfig {
    /// Loads the configuration from `AIRTABLE_TOKEN`, `AIRTABLE_BASE_ID`,
    /// and `AIRTABLE_TABLE_NAME`.
    ///
    /// # Errors
    ///
    /// Returns [`AirtableError::Config`] naming the first missing
    /// variable. Callers treat this as fatal at startup, not as a
    /// per-submission error.
    pub fn from_env() -> Result<Self, AirtableError> {
        Ok(Self {
            token: require_env("AIRTABLE_TOKEN")?,
            base_id: require_env("AIRTABLE_BASE_ID")?,
            table_name: require_env("AIRTABLE_TABLE_NAME")?,
        })
    }
}

fn require_env(name: &str) -> Result<String, AirtableError> {
    std::env::var(name).map_err(|_| AirtableError::Config {
        message: format!("{name} environment variable not set"),
    })
}

/// Request body for record creation.
#[derive(Serialize)]
struct CreateRecordRequest<'a> {
    fields: RecordFields<'a>,
}

/// One row's cell values, keyed by the table's column names.
#[derive(Serialize)]
struct RecordFields<'a> {
    #[serde(rename = "Name")]
    name: &'a str,
    #[serde(rename = "Email")]
    email: &'a str,
    #[serde(rename = "Program")]
    program: &'a str,
    #[serde(rename = "LinkedIn Profile")]
    linkedin_profile: &'a str,
    #[serde(rename = "Hobbies and Interests")]
    hobbies: &'a str,
    #[serde(rename = "Goals")]
    goals: &'a str,
    #[serde(rename = "Career Aspirations")]
    career_aspirations: &'a str,
    #[serde(rename = "Date")]
    date: String,
}

impl<'a> RecordFields<'a> {
    fn from_record(record: &'a RegistrationRecord) -> Self {
        Self {
            name: &record.name,
            email: &record.email,
            program: record.program.as_ref(),
            linkedin_profile: &record.profile_text,
            hobbies: &record.hobbies,
            goals: &record.goals,
            career_aspirations: &record.career_aspirations,
            date: record.submitted_at.format(DATE_FORMAT).to_string(),
        }
    }
}

/// Airtable API error response.
#[derive(Deserialize)]
struct AirtableErrorResponse {
    error: AirtableErrorDetail,
}

#[derive(Deserialize)]
struct AirtableErrorDetail {
    message: String,
}

/// Client for appending records to one Airtable table.
pub struct AirtableClient {
    config: AirtableConfig,
    client: reqwest::Client,
    api_base: String,
}

impl AirtableClient {
    /// Creates a new client for the configured base and table.
    #[must_use]
    pub fn new(config: AirtableConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
            api_base: "https://api.airtable.com/v0".to_owned(),
        }
    }

    /// Overrides the API base URL.
    #[must_use]
    pub fn with_api_base(mut self, api_base: &str) -> Self {
        self.api_base = api_base.trim_end_matches('/').to_owned();
        self
    }

    /// Builds the record-creation endpoint URL.
    ///
    /// Table names commonly contain spaces; Airtable expects them
    /// percent-encoded in the path.
    fn endpoint(&self) -> String {
        let table = self.config.table_name.replace(' ', "%20");
        format!("{}/{}/{table}", self.api_base, self.config.base_id)
    }

    /// Creates one row from the given record.
    ///
    /// # Errors
    ///
    /// Returns [`AirtableError::Http`] if the request could not be sent
    /// and [`AirtableError::Api`] with the remote message for any
    /// non-success status. The insert is not retried.
    pub async fn create(&self, record: &RegistrationRecord) -> Result<(), AirtableError> {
        let request = CreateRecordRequest {
            fields: RecordFields::from_record(record),
        };

        let resp = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.config.token)
            .json(&request)
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            let err: AirtableErrorResponse =
                serde_json::from_str(&body).unwrap_or_else(|_| AirtableErrorResponse {
                    error: AirtableErrorDetail {
                        message: format!("HTTP {status}: {body}"),
                    },
                });
            return Err(AirtableError::Api {
                message: err.error.message,
            });
        }

        log::debug!(
            "Created Airtable record in {}/{}",
            self.config.base_id,
            self.config.table_name
        );

        Ok(())
    }
}

#[async_trait]
impl RecordSink for AirtableClient {
    async fn insert(&self, record: &RegistrationRecord) -> Result<(), SinkError> {
        self.create(record).await.map_err(Into::into)
    }
}
