//! HTTP handler functions for the peer-match registration API.

use actix_web::{HttpResponse, web};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use peer_match_registration::{RegistrationError, process::process};
use peer_match_registration_models::{Program, RawSubmission};
use peer_match_server_models::{ApiError, ApiHealth, RegisterRequest, RegisterResponse};

use crate::AppState;

/// `GET /`
///
/// Serves the embedded single-page registration form.
pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(include_str!("../static/index.html"))
}

/// `GET /api/health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /api/programs`
///
/// Returns the offered program labels for the form's radio group, in
/// presentation order.
pub async fn programs() -> HttpResponse {
    let labels: Vec<String> = Program::all().iter().map(ToString::to_string).collect();
    HttpResponse::Ok().json(labels)
}

/// `POST /api/register`
///
/// Runs one submission through the pipeline and maps each failure mode
/// to its own response: validation → 422 with per-field messages,
/// unreadable or empty PDF → 422 with a single message, remote store
/// failure → 502 with the underlying detail.
pub async fn register(
    state: web::Data<AppState>,
    body: web::Json<RegisterRequest>,
) -> HttpResponse {
    let request = body.into_inner();

    let document = match request.document_base64.as_deref().map(|d| BASE64.decode(d)) {
        None => None,
        Some(Ok(bytes)) => Some(bytes),
        Some(Err(e)) => {
            log::warn!("Rejected register request with undecodable document: {e}");
            return HttpResponse::BadRequest().json(ApiError::new(
                "The uploaded file could not be decoded. Please attach it again.",
            ));
        }
    };

    let raw = RawSubmission {
        name: request.name,
        email: request.email,
        program: request.program,
        document,
        hobbies: request.hobbies,
        goals: request.goals,
        career_aspirations: request.career_aspirations,
        consent: request.consent,
    };

    match process(&raw, state.extractor.as_ref(), state.sink.as_ref()).await {
        Ok(_) => HttpResponse::Ok().json(RegisterResponse {
            message: "Registration successful.".to_owned(),
        }),
        Err(RegistrationError::Validation(field_errors)) => {
            HttpResponse::UnprocessableEntity().json(ApiError {
                error: "Please correct the fields below and resubmit.".to_owned(),
                field_errors,
            })
        }
        Err(RegistrationError::Extraction(detail)) => {
            log::warn!("PDF extraction failed: {detail}");
            HttpResponse::UnprocessableEntity().json(ApiError::new(&format!(
                "An error occurred while processing your PDF: {detail}. \
                 Please try uploading the file again."
            )))
        }
        Err(RegistrationError::EmptyDocument) => {
            HttpResponse::UnprocessableEntity().json(ApiError::new(
                "The uploaded PDF appears to be empty or contains no readable text. \
                 Please upload a valid LinkedIn profile PDF.",
            ))
        }
        Err(RegistrationError::RemoteStore(detail)) => {
            log::error!("Failed to store registration: {detail}");
            HttpResponse::BadGateway().json(ApiError::new(&format!(
                "Your registration could not be saved: {detail}"
            )))
        }
    }
}
