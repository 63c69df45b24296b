//! Submission endpoint tests.
//!
//! These exercise the full submit path against a mock server: RID
//! extraction, optional-parameter omission, the megablast rewrite, and
//! cookie persistence rules.

mod common;

use blast_client::ClientError;
use common::*;

#[tokio::test]
async fn test_submit_extracts_rid() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/Blast.cgi"))
        .and(body_string_contains("CMD=Put"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("submit_ok.html")))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let rid = client
        .submit(&SubmitParams::new(Program::Blastn, "ACGTACGT"))
        .await
        .unwrap();

    assert_eq!(rid.as_str(), "7WD3KUT2014");
    assert_eq!(rid.as_str().len(), 11);
}

#[tokio::test]
async fn test_submit_omits_unset_optionals() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/Blast.cgi"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("submit_ok.html")))
        .mount(&server)
        .await;

    let client = test_client(&server);
    client
        .submit(&SubmitParams::new(Program::Blastn, "ACGTACGT"))
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let body = String::from_utf8(requests[0].body.clone()).unwrap();
    assert!(body.contains("DATABASE=nt"));
    assert!(!body.contains("EXPECT="));
    assert!(!body.contains("ALIGNMENTS="));
    assert!(!body.contains("DESCRIPTIONS="));
}

#[tokio::test]
async fn test_submit_megablast_rewrites_program() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/Blast.cgi"))
        .and(body_string_contains("PROGRAM=blastn"))
        .and(body_string_contains("MEGABLAST=on"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("submit_ok.html")))
        .mount(&server)
        .await;

    let client = test_client(&server);
    client
        .submit(&SubmitParams::new(Program::Megablast, "ACGTACGT"))
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let body = String::from_utf8(requests[0].body.clone()).unwrap();
    assert!(!body.contains("megablast"));
}

#[tokio::test]
async fn test_submit_rejection_surfaces_error_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/Blast.cgi"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("submit_error.html")))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client
        .submit(&SubmitParams::new(Program::Blastn, ""))
        .await
        .unwrap_err();

    match err {
        ClientError::SubmitRejected { message } => {
            assert_eq!(message, "Query contains no sequence data");
        }
        other => panic!("expected SubmitRejected, got {other:?}"),
    }
}

#[tokio::test]
async fn test_successful_submit_persists_session_cookies() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let cookie_path = dir.path().join("cookies.json");

    Mock::given(method("POST"))
        .and(path("/Blast.cgi"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", "ncbi_sid=1A2B3C4D; Path=/; Max-Age=86400")
                .set_body_string(load_fixture("submit_ok.html")),
        )
        .mount(&server)
        .await;

    let client = BlastClient::builder()
        .base_url(server.uri())
        .cookie_path(&cookie_path)
        .build()
        .unwrap();
    client
        .submit(&SubmitParams::new(Program::Blastn, "ACGTACGT"))
        .await
        .unwrap();

    let saved = std::fs::read_to_string(&cookie_path).unwrap();
    assert!(saved.contains("ncbi_sid"));
}

#[tokio::test]
async fn test_failed_submit_does_not_persist_cookies() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let cookie_path = dir.path().join("cookies.json");

    Mock::given(method("POST"))
        .and(path("/Blast.cgi"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", "ncbi_sid=1A2B3C4D; Path=/; Max-Age=86400")
                .set_body_string(load_fixture("submit_error.html")),
        )
        .mount(&server)
        .await;

    let client = BlastClient::builder()
        .base_url(server.uri())
        .cookie_path(&cookie_path)
        .build()
        .unwrap();
    let result = client
        .submit(&SubmitParams::new(Program::Blastn, ""))
        .await;
    assert!(result.is_err());

    // load() created the file empty; the rejected submission must not fill it
    let saved = std::fs::read_to_string(&cookie_path).unwrap();
    assert!(!saved.contains("ncbi_sid"));
}
