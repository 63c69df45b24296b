//! Status endpoint tests.
//!
//! Each fixture is a captured status page; the tests check the token
//! classification and the best-effort fields scraped alongside it.

mod common;

use blast_client::JobStatus;
use common::*;

async fn status_from_fixture(fixture: &str) -> JobStatus {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/Blast.cgi"))
        .and(body_string_contains("CMD=Get"))
        .and(body_string_contains("FORMAT_TYPE=HTML"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture(fixture)))
        .mount(&server)
        .await;

    let client = test_client(&server);
    client
        .get_status(&Rid::new("7WD3KUT2014"))
        .await
        .unwrap()
}

#[tokio::test]
async fn test_waiting_status_carries_timing_fields() {
    let status = status_from_fixture("status_waiting.html").await;
    match status {
        JobStatus::Waiting { submitted, elapsed } => {
            assert_eq!(submitted.as_deref(), Some("Tue Aug 12 14:03:22 2026"));
            assert_eq!(elapsed.as_deref(), Some("00:01:05"));
        }
        other => panic!("expected WAITING, got {other:?}"),
    }
    assert_eq!(status_from_fixture("status_waiting.html").await.code(), 5);
}

#[tokio::test]
async fn test_ready_status() {
    let status = status_from_fixture("status_ready.html").await;
    assert_eq!(status, JobStatus::Ready);
    assert_eq!(status.code(), 0);
}

#[tokio::test]
async fn test_unknown_status() {
    let status = status_from_fixture("status_unknown.html").await;
    assert_eq!(status, JobStatus::Unknown);
    assert_eq!(status.code(), 3);
}

#[tokio::test]
async fn test_failed_status_reports_last_alert_as_cause() {
    let status = status_from_fixture("status_failed.html").await;
    match &status {
        JobStatus::Failed { cause } => {
            // two alert fragments on the page; the last names the cause
            assert_eq!(cause.as_deref(), Some("CPU usage limit was exceeded"));
        }
        other => panic!("expected FAILED, got {other:?}"),
    }
    assert_eq!(status.code(), 4);
}

#[tokio::test]
async fn test_unrecognized_token_is_preserved() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/Blast.cgi"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("QBlastInfoBegin\n\tStatus=QUEUED\nQBlastInfoEnd\n"),
        )
        .mount(&server)
        .await;

    let client = test_client(&server);
    let status = client
        .get_status(&Rid::new("7WD3KUT2014"))
        .await
        .unwrap();
    assert_eq!(status, JobStatus::Other("QUEUED".to_string()));
    assert_eq!(status.code(), 1);
}
