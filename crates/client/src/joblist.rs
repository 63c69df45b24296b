//! Recent-jobs table parser.
//!
//! The recent-results page renders the user's jobs as an HTML table whose
//! cells carry positional class markers `c0`..`c7`. Parsing is an
//! explicit state machine over a streaming open/text/close traversal of
//! the markup: `in_table` tracks table membership, `pending` the column
//! awaiting its text. A `c0` cell starts a new row. The request-id column
//! is special: the id is rendered inside a hyperlink and may arrive after
//! newline-only chunks, so that column stays armed until a real chunk
//! shows up. That asymmetry is deliberate.

use ego_tree::iter::Edge;
use scraper::Html;

/// Display names for the eight columns, in `c0`..`c7` order.
pub const COLUMN_NAMES: [&str; 8] = [
    "Submitted at",
    "Request ID",
    "Status",
    "Program",
    "Title",
    "Qlength",
    "Database",
    "Expires at",
];

/// Index of the request-id column, whose text may span chunks.
const RID_COLUMN: usize = 1;

/// One row of the recent-jobs table.
///
/// Fields default to the column display names, so a cell the page never
/// fills retains its header label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRow {
    pub fields: [String; 8],
}

impl JobRow {
    fn new() -> Self {
        JobRow {
            fields: COLUMN_NAMES.map(String::from),
        }
    }

    /// The header-like row of column display names.
    pub fn header() -> Self {
        Self::new()
    }
}

/// Which kind of cell is waiting for text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    /// A `c0`..`c7` column cell.
    Column(usize),
    /// A cell with some other class marker; its text is consumed and dropped.
    Skip,
}

/// State machine driven by markup open/text/close events.
#[derive(Debug)]
struct JobTableScanner {
    in_table: bool,
    pending: Option<Pending>,
    rows: Vec<JobRow>,
}

impl JobTableScanner {
    fn new() -> Self {
        JobTableScanner {
            in_table: false,
            pending: None,
            rows: vec![JobRow::header()],
        }
    }

    fn handle_start(&mut self, tag: &str, class: Option<&str>) {
        if self.in_table {
            if tag == "td" {
                let Some(class) = class else { return };
                let marker: String = class.chars().take(2).collect();
                if marker == "cL" {
                    return;
                }
                self.pending = match marker.strip_prefix('c').and_then(|d| d.parse().ok()) {
                    Some(col) if col < COLUMN_NAMES.len() => Some(Pending::Column(col)),
                    _ => Some(Pending::Skip),
                };
            }
        } else if tag == "table" {
            self.in_table = true;
        }
    }

    fn handle_end(&mut self, tag: &str) {
        if tag == "table" {
            self.in_table = false;
        }
    }

    fn handle_text(&mut self, data: &str) {
        if !self.in_table || data == " " {
            return;
        }
        let Some(pending) = self.pending else { return };
        let col = match pending {
            Pending::Column(col) => col,
            Pending::Skip => {
                self.pending = None;
                return;
            }
        };
        if col == 0 {
            self.rows.push(JobRow::new());
        }
        let row = self.rows.last_mut().expect("rows starts non-empty");
        if col != RID_COLUMN {
            row.fields[col] = data.trim_end_matches('\n').to_string();
            self.pending = None;
        } else if data != "\n" {
            row.fields[col] = data.to_string();
            self.pending = None;
        }
    }

    fn finish(self) -> Vec<JobRow> {
        self.rows
    }
}

/// Parse the recent-jobs page into a header row plus one row per job,
/// in document order.
pub fn parse_job_table(html: &str) -> Vec<JobRow> {
    let document = Html::parse_document(html);
    let mut scanner = JobTableScanner::new();
    for edge in document.tree.root().traverse() {
        match edge {
            Edge::Open(node) => {
                if let Some(element) = node.value().as_element() {
                    scanner.handle_start(element.name(), element.attr("class"));
                } else if let Some(text) = node.value().as_text() {
                    scanner.handle_text(text);
                }
            }
            Edge::Close(node) => {
                if let Some(element) = node.value().as_element() {
                    scanner.handle_end(element.name());
                }
            }
        }
    }
    scanner.finish()
}
