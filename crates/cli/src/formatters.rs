//! Output formatting for the recent-jobs listing.
//!
//! The listing comes back as a header row of column names plus one row
//! per job; both render through the same path so the header aligns with
//! the data.

use blast_client::JobRow;

/// Width of each fixed-width column, truncating longer values.
const COLUMN_WIDTH: usize = 15;

/// Render job rows as fixed-width columns or tab-separated values.
///
/// TSV passes field values through untouched for downstream tools; the
/// fixed-width rendering truncates to keep one terminal line per job.
pub(crate) fn format_job_rows(rows: &[JobRow], tsv: bool) -> String {
    let mut out = String::new();
    for row in rows {
        let line = if tsv {
            row.fields.join("\t")
        } else {
            row.fields
                .iter()
                .map(|f| format!("{f:<width$.width$}", width = COLUMN_WIDTH))
                .collect::<Vec<_>>()
                .join(" ")
        };
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}
