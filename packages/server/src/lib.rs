#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web registration server for the peer-match application.
//!
//! Serves the embedded single-page registration form and the JSON API
//! behind it: program options, health, and the `POST /api/register`
//! endpoint that runs the validate → extract → store pipeline. Each
//! request is handled synchronously to completion; there is no queueing
//! and no retry.

mod handlers;

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};
use peer_match_registration::{RecordSink, TextExtractor};

/// Upper bound on the JSON request body.
///
/// The PDF arrives base64-encoded inside the body, so this has to
/// comfortably fit a LinkedIn profile export (usually well under 2 MB)
/// plus the encoding overhead.
const MAX_JSON_BODY_BYTES: usize = 16 * 1024 * 1024;

/// Shared application state.
pub struct AppState {
    /// Extracts plaintext from uploaded PDFs.
    pub extractor: Arc<dyn TextExtractor>,
    /// Appends records to the remote store.
    pub sink: Arc<dyn RecordSink>,
}

/// Starts the registration server.
///
/// Takes the already-configured record sink and text extractor so the
/// binary decides where records go; the server itself reads only
/// `BIND_ADDR` and `PORT` from the environment. This is a regular async
/// function — the caller provides the async runtime (e.g. via
/// `#[actix_web::main]`).
///
/// # Errors
///
/// Returns an `std::io::Result` error if the HTTP server fails to bind
/// or encounters a runtime error.
pub async fn run_server(
    extractor: Arc<dyn TextExtractor>,
    sink: Arc<dyn RecordSink>,
) -> std::io::Result<()> {
    let state = web::Data::new(AppState { extractor, sink });

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    log::info!("Starting server on {bind_addr}:{port}");

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .app_data(web::JsonConfig::default().limit(MAX_JSON_BODY_BYTES))
            .route("/", web::get().to(handlers::index))
            .service(
                web::scope("/api")
                    .route("/health", web::get().to(handlers::health))
                    .route("/programs", web::get().to(handlers::programs))
                    .route("/register", web::post().to(handlers::register)),
            )
    })
    .bind((bind_addr, port))?
    .run()
    .await
}
