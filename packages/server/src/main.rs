#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Registration server binary for the peer-match application.
//!
//! Loads the Airtable secrets from the environment (fatal if any is
//! missing), wires up the PDF extractor and the Airtable sink, and runs
//! the HTTP server.

use std::sync::Arc;

use peer_match_airtable::{AirtableClient, AirtableConfig};
use peer_match_pdf::PdfTextExtractor;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    pretty_env_logger::init_custom_env("RUST_LOG");

    let config = AirtableConfig::from_env().expect("Missing Airtable configuration");
    log::info!(
        "Storing registrations in Airtable base {} table {}",
        config.base_id,
        config.table_name
    );
    let sink = AirtableClient::new(config);

    peer_match_server::run_server(Arc::new(PdfTextExtractor), Arc::new(sink)).await
}
