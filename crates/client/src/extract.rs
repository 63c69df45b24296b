//! Best-effort extractors over response text.
//!
//! Every signal the service emits (request identifiers, job statuses,
//! error causes, timestamps) is recovered by scanning free-form HTML
//! with fixed patterns. There is no schema guarantee; each extractor is a
//! named fallible function returning `Option` so callers decide what a
//! miss means, and tests can substitute fixture bodies.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::Rid;

static RID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"RID = (.{11})").expect("valid pattern"));
static ERROR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Error: ([^<]*)").expect("valid pattern"));
static STATUS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Status=(.*)").expect("valid pattern"));
static SUBMITTED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Submitted at.*(\w{3} \w{3} \d{2} [\d:]{8} \d{4})").expect("valid pattern")
});
static ELAPSED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Time since submission.*([\d:]{8})").expect("valid pattern"));
static ALERT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"alert-text">([^<]*)"#).expect("valid pattern"));

/// The 11-character request identifier from a submission response.
pub fn rid(body: &str) -> Option<Rid> {
    RID_RE
        .captures(body)
        .map(|c| Rid::new(c.get(1).expect("group 1 exists").as_str()))
}

/// The error message a rejected submission carries instead of a RID.
pub fn error_message(body: &str) -> Option<String> {
    ERROR_RE
        .captures(body)
        .map(|c| c.get(1).expect("group 1 exists").as_str().to_string())
}

/// The raw `Status=` token from a status response.
pub fn status_token(body: &str) -> Option<&str> {
    STATUS_RE
        .captures(body)
        .map(|c| c.get(1).expect("group 1 exists").as_str())
}

/// The submission timestamp shown while a job is WAITING.
pub fn submitted_at(body: &str) -> Option<String> {
    SUBMITTED_RE
        .captures(body)
        .map(|c| c.get(1).expect("group 1 exists").as_str().to_string())
}

/// The elapsed-time string shown while a job is WAITING.
pub fn elapsed(body: &str) -> Option<String> {
    ELAPSED_RE
        .captures(body)
        .map(|c| c.get(1).expect("group 1 exists").as_str().to_string())
}

/// The *last* of possibly multiple alert fragments on a FAILED page.
///
/// Earlier fragments are generic banners; the final one names the cause.
pub fn last_alert(body: &str) -> Option<String> {
    ALERT_RE
        .captures_iter(body)
        .last()
        .map(|c| c.get(1).expect("group 1 exists").as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rid_is_exactly_eleven_chars() {
        let body = "<html>... RID = ABCDEFGHIJK and more text</html>";
        let rid = rid(body).unwrap();
        assert_eq!(rid.as_str(), "ABCDEFGHIJK");
        assert_eq!(rid.as_str().len(), 11);
    }

    #[test]
    fn test_rid_absent() {
        assert!(rid("<html>no identifier here</html>").is_none());
    }

    #[test]
    fn test_error_message_stops_at_tag() {
        let body = r#"<p>Error: Query contains no sequence data</p>"#;
        assert_eq!(
            error_message(body).as_deref(),
            Some("Query contains no sequence data")
        );
    }

    #[test]
    fn test_status_token_is_rest_of_line() {
        let body = "QBlastInfoBegin\n\tStatus=WAITING\nQBlastInfoEnd";
        assert_eq!(status_token(body), Some("WAITING"));
    }

    #[test]
    fn test_submitted_and_elapsed() {
        let body = concat!(
            "<tr><td>Submitted at</td><td>Tue Aug 12 14:03:22 2026</td></tr>\n",
            "<tr><td>Time since submission</td><td>00:01:05</td></tr>\n",
        );
        assert_eq!(
            submitted_at(body).as_deref(),
            Some("Tue Aug 12 14:03:22 2026")
        );
        assert_eq!(elapsed(body).as_deref(), Some("00:01:05"));
    }

    #[test]
    fn test_optional_fields_miss_quietly() {
        let body = "Status=WAITING";
        assert!(submitted_at(body).is_none());
        assert!(elapsed(body).is_none());
    }

    #[test]
    fn test_last_alert_wins() {
        let body = concat!(
            r#"<div class="alert-text">There was a problem with the search</div>"#,
            "\n",
            r#"<p class="alert-text">CPU usage limit was exceeded</p>"#,
        );
        assert_eq!(
            last_alert(body).as_deref(),
            Some("CPU usage limit was exceeded")
        );
    }
}
