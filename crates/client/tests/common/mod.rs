//! Common test utilities for integration tests.
//!
//! Fixtures are response bodies captured from the BLAST service (and
//! trimmed), loaded from the `fixtures/` directory relative to the crate
//! root. Mock servers are set up with wiremock directly in each test.

use std::path::PathBuf;

#[allow(unused_imports)]
pub use blast_client::{BlastClient, Program, ReportFormat, Rid, SubmitParams};
#[allow(unused_imports)]
pub use wiremock::matchers::{body_string_contains, method, path};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Load a fixture file as a string.
pub fn load_fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {e}", path.display()))
}

/// A client pointed at the mock server, with cookie persistence off.
pub fn test_client(server: &MockServer) -> BlastClient {
    BlastClient::builder()
        .base_url(server.uri())
        .use_cache(false)
        .build()
        .expect("client builds")
}
