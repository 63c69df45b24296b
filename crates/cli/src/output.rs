//! Result output routing.
//!
//! Command results go to stdout by default, or to a file when `--out` is
//! given. Everything else (progress, errors, logs) stays on stderr.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

/// Write `content` to stdout or to `out` when set.
///
/// The content already carries its trailing newline; stdout gets it
/// verbatim. File output is flushed before the handle is dropped.
pub(crate) fn write_output(content: &str, out: Option<&Path>) -> Result<()> {
    match out {
        None => {
            print!("{content}");
            std::io::stdout().flush().context("flushing stdout")?;
        }
        Some(path) => {
            let mut file = File::create(path)
                .with_context(|| format!("creating output file {}", path.display()))?;
            file.write_all(content.as_bytes())
                .with_context(|| format!("writing output file {}", path.display()))?;
            file.flush()
                .with_context(|| format!("flushing output file {}", path.display()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_output_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");
        write_output("line one\nline two\n", Some(&path)).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "line one\nline two\n"
        );
    }

    #[test]
    fn test_write_output_fails_on_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("report.txt");
        assert!(write_output("x", Some(&path)).is_err());
    }
}
