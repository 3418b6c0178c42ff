//! Submission processing: validate, extract, assemble, persist.

use chrono::Utc;
use peer_match_registration_models::{RawSubmission, RegistrationRecord};

use crate::{RecordSink, RegistrationError, TextExtractor, validate::validate};

/// Runs one submission through the full pipeline.
///
/// Steps, in order, stopping at the first failure:
///
/// 1. Validate all fields. On any violation no extraction or network
///    call happens.
/// 2. Extract the PDF text.
/// 3. Reject documents whose extracted text trims to empty.
/// 4. Assemble the [`RegistrationRecord`] with the current timestamp.
/// 5. Insert the record into the sink — exactly one insert per valid
///    submission, never retried. Identical resubmissions create
///    duplicate remote rows; the store enforces no uniqueness.
///
/// Returns the stored record on success.
///
/// # Errors
///
/// Returns the corresponding [`RegistrationError`] variant for each
/// failure mode described above.
pub async fn process(
    raw: &RawSubmission,
    extractor: &dyn TextExtractor,
    sink: &dyn RecordSink,
) -> Result<RegistrationRecord, RegistrationError> {
    let submission = validate(raw).map_err(RegistrationError::Validation)?;

    let text = extractor
        .extract(&submission.document)
        .map_err(|e| RegistrationError::Extraction(e.message))?;

    let profile_text = text.trim();
    if profile_text.is_empty() {
        return Err(RegistrationError::EmptyDocument);
    }

    let record = RegistrationRecord {
        name: submission.name,
        email: submission.email,
        program: submission.program,
        profile_text: profile_text.to_owned(),
        hobbies: submission.hobbies,
        goals: submission.goals,
        career_aspirations: submission.career_aspirations,
        submitted_at: Utc::now(),
    };

    sink.insert(&record)
        .await
        .map_err(|e| RegistrationError::RemoteStore(e.message))?;

    log::info!("Stored registration for {}", record.email);

    Ok(record)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::{ExtractionError, SinkError};

    use super::*;

    /// Extractor fake returning a fixed outcome and counting calls.
    struct FakeExtractor {
        result: Result<String, String>,
        calls: AtomicUsize,
    }

    impl FakeExtractor {
        fn returning(text: &str) -> Self {
            Self {
                result: Ok(text.to_owned()),
                calls: AtomicUsize::new(0),
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                result: Err(message.to_owned()),
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl TextExtractor for FakeExtractor {
        fn extract(&self, _document: &[u8]) -> Result<String, ExtractionError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result
                .clone()
                .map_err(|message| ExtractionError { message })
        }
    }

    /// Sink fake recording every inserted record.
    #[derive(Default)]
    struct FakeSink {
        inserted: Mutex<Vec<RegistrationRecord>>,
        fail_with: Option<String>,
    }

    #[async_trait::async_trait]
    impl RecordSink for FakeSink {
        async fn insert(&self, record: &RegistrationRecord) -> Result<(), SinkError> {
            if let Some(message) = &self.fail_with {
                return Err(SinkError {
                    message: message.clone(),
                });
            }
            self.inserted.lock().unwrap().push(record.clone());
            Ok(())
        }
    }

    fn valid_raw() -> RawSubmission {
        RawSubmission {
            name: "Jane Smith".to_owned(),
            email: "jane@whu.edu".to_owned(),
            program: Some("Master in Business Analytics".to_owned()),
            document: Some(b"%PDF-1.4 fake".to_vec()),
            hobbies: "Hiking".to_owned(),
            goals: "Graduate with distinction".to_owned(),
            career_aspirations: "Lead an analytics team".to_owned(),
            consent: true,
        }
    }

    #[tokio::test]
    async fn valid_submission_inserts_exactly_one_record() {
        let extractor = FakeExtractor::returning("Experienced analyst...");
        let sink = FakeSink::default();

        let record = process(&valid_raw(), &extractor, &sink).await.unwrap();

        assert_eq!(record.profile_text, "Experienced analyst...");
        assert_eq!(record.email, "jane@whu.edu");
        let inserted = sink.inserted.lock().unwrap();
        assert_eq!(inserted.len(), 1);
        assert_eq!(inserted[0], record);
    }

    #[tokio::test]
    async fn validation_failure_skips_extraction_and_insert() {
        let extractor = FakeExtractor::returning("text");
        let sink = FakeSink::default();
        let raw = RawSubmission {
            email: "not-an-email".to_owned(),
            ..valid_raw()
        };

        let err = process(&raw, &extractor, &sink).await.unwrap_err();

        assert!(matches!(err, RegistrationError::Validation(ref msgs)
            if msgs == &["Please enter a valid email address."]));
        assert_eq!(extractor.calls.load(Ordering::SeqCst), 0);
        assert!(sink.inserted.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn whitespace_only_document_is_an_empty_document_error() {
        let extractor = FakeExtractor::returning(" \n\t  \n");
        let sink = FakeSink::default();

        let err = process(&valid_raw(), &extractor, &sink).await.unwrap_err();

        assert!(matches!(err, RegistrationError::EmptyDocument));
        assert!(sink.inserted.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn extraction_failure_aborts_before_any_insert() {
        let extractor = FakeExtractor::failing("not a PDF");
        let sink = FakeSink::default();

        let err = process(&valid_raw(), &extractor, &sink).await.unwrap_err();

        assert!(matches!(err, RegistrationError::Extraction(ref msg) if msg == "not a PDF"));
        assert!(sink.inserted.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn sink_failure_surfaces_the_underlying_detail() {
        let extractor = FakeExtractor::returning("profile");
        let sink = FakeSink {
            fail_with: Some("HTTP 401: invalid token".to_owned()),
            ..FakeSink::default()
        };

        let err = process(&valid_raw(), &extractor, &sink).await.unwrap_err();

        assert!(
            matches!(err, RegistrationError::RemoteStore(ref msg) if msg.contains("invalid token"))
        );
    }

    #[tokio::test]
    async fn identical_resubmission_creates_a_second_row() {
        let extractor = FakeExtractor::returning("profile");
        let sink = FakeSink::default();
        let raw = valid_raw();

        process(&raw, &extractor, &sink).await.unwrap();
        process(&raw, &extractor, &sink).await.unwrap();

        assert_eq!(sink.inserted.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn extracted_text_keeps_interior_whitespace() {
        let extractor = FakeExtractor::returning("  page one\npage two  ");
        let sink = FakeSink::default();

        let record = process(&valid_raw(), &extractor, &sink).await.unwrap();

        assert_eq!(record.profile_text, "page one\npage two");
    }
}
