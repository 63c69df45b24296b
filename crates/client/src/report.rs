//! Result-document cleanup and truncation.
//!
//! The service's own result-limiting parameter does not work reliably, so
//! truncation is done client-side with format-specific line heuristics.
//! Both scanners reproduce observed behavior of the service's rendered
//! pages; their boundary quirks (inclusive counting, marker ordering
//! within a line) are intentional and must not be "corrected".

/// Boilerplate the formatter prepends to Text and Tabular renderings.
const BOILERPLATE: &str = "<p><!--\nQBlastInfoBegin\n\tStatus=READY\nQBlastInfoEnd\n--><p>\n<PRE>\n";

/// Strip the fixed boilerplate prefix.
///
/// Removes exactly one occurrence at the start; a body without the prefix
/// is returned unchanged, so the strip is idempotent.
pub fn strip_boilerplate(body: &str) -> &str {
    body.strip_prefix(BOILERPLATE).unwrap_or(body)
}

/// Cap a tabular report at `max` records.
///
/// A crude line-count cap, not a per-alignment cap: the running count
/// starts at 0 and lines pass while count <= max, so the first `max + 1`
/// lines are emitted. The inclusive boundary is deliberate.
pub fn truncate_tabular(text: &str, max: usize) -> String {
    let mut out = String::new();
    let mut count = 0usize;
    for line in text.split('\n') {
        if count <= max {
            count += 1;
            out.push_str(line);
            out.push('\n');
        }
    }
    out
}

/// Cap a plain-text (pairwise) report at `max` records per section.
///
/// A stateful scanner tracks a "count trigger" prefix:
/// - the descriptions header arms counting for every nonempty line;
/// - an `ALIGNMENTS` marker resets the count and arms counting for
///   `>`-prefixed alignment entries;
/// - a `Database: ` marker resets the count, disarms it, and re-enables
///   output.
///
/// Once the count exceeds `max`, lines are suppressed until the next
/// reset marker. Each line is counted against the prefix in force
/// *before* any markers on that same line take effect.
pub fn truncate_text(text: &str, max: usize) -> String {
    let mut out = String::new();
    let mut count = 0usize;
    let mut trigger: Option<&str> = None;
    let mut emitting = true;

    for line in text.split('\n') {
        if let Some(prefix) = trigger
            && line.starts_with(prefix)
            && !line.is_empty()
        {
            count += 1;
        }
        if line.contains("Sequences producing significant alignments") {
            trigger = Some("");
        }
        if line.contains("ALIGNMENTS") {
            emitting = true;
            trigger = Some(">");
            count = 0;
        }
        if line.contains("Database: ") {
            count = 0;
            trigger = None;
            emitting = true;
        }
        if count > max {
            emitting = false;
        }
        if emitting {
            out.push_str(line);
            out.push('\n');
        }
    }
    out
}
