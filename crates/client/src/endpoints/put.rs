//! Job submission (`CMD=Put`).

use reqwest::Client;
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::extract;
use crate::models::{Program, Rid};

/// Parameters for a search submission.
#[derive(Debug, Clone)]
pub struct SubmitParams {
    pub program: Program,
    /// Raw sequence or FASTA file content, transmitted unvalidated.
    pub query: String,
    /// Overrides the program's default database when set.
    pub database: Option<String>,
    /// E-value cutoff, passed through verbatim.
    pub evalue: Option<String>,
    /// Caps both `ALIGNMENTS` and `DESCRIPTIONS` when set.
    pub max_targets: Option<usize>,
}

impl SubmitParams {
    pub fn new(program: Program, query: impl Into<String>) -> Self {
        SubmitParams {
            program,
            query: query.into(),
            database: None,
            evalue: None,
            max_targets: None,
        }
    }

    /// The database actually searched: the override, or the program default.
    pub fn database(&self) -> &str {
        self.database
            .as_deref()
            .unwrap_or_else(|| self.program.default_database())
    }

    /// Assemble the form body. Absent optionals are not sent at all.
    fn form(&self) -> Vec<(&'static str, String)> {
        let mut form = vec![
            ("CMD", "Put".to_string()),
            ("PROGRAM", self.program.wire_program().to_string()),
            ("DATABASE", self.database().to_string()),
            ("QUERY", self.query.clone()),
        ];
        if self.program.is_megablast() {
            form.push(("MEGABLAST", "on".to_string()));
        }
        if let Some(evalue) = &self.evalue {
            form.push(("EXPECT", evalue.clone()));
        }
        if let Some(n) = self.max_targets {
            form.push(("ALIGNMENTS", n.to_string()));
            form.push(("DESCRIPTIONS", n.to_string()));
        }
        form
    }
}

/// Submit a search and extract the request identifier.
///
/// A response without the RID pattern is a rejection: the page's error
/// message is surfaced and nothing is retried.
pub async fn submit_job(http: &Client, base_url: &str, params: &SubmitParams) -> Result<Rid> {
    debug!(program = %params.program, database = params.database(), "submitting search");

    let url = super::cgi_url(base_url);
    let body = http.post(&url).form(&params.form()).send().await?.text().await?;

    match extract::rid(&body) {
        Some(rid) => {
            debug!(%rid, "submission accepted");
            Ok(rid)
        }
        None => Err(match extract::error_message(&body) {
            Some(message) => ClientError::SubmitRejected { message },
            None => ClientError::InvalidResponse(
                "submission response carried neither a RID nor an error message".to_string(),
            ),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_omits_unset_optionals() {
        let params = SubmitParams::new(Program::Blastn, "ACGT");
        let form = params.form();
        let keys: Vec<&str> = form.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, ["CMD", "PROGRAM", "DATABASE", "QUERY"]);
        assert!(form.contains(&("DATABASE", "nt".to_string())));
    }

    #[test]
    fn test_form_includes_set_optionals() {
        let mut params = SubmitParams::new(Program::Blastp, "MKV");
        params.evalue = Some("1e-5".to_string());
        params.max_targets = Some(25);
        let form = params.form();
        assert!(form.contains(&("EXPECT", "1e-5".to_string())));
        assert!(form.contains(&("ALIGNMENTS", "25".to_string())));
        assert!(form.contains(&("DESCRIPTIONS", "25".to_string())));
    }

    #[test]
    fn test_megablast_form_rewrite() {
        let params = SubmitParams::new(Program::Megablast, "ACGT");
        let form = params.form();
        assert!(form.contains(&("PROGRAM", "blastn".to_string())));
        assert!(form.contains(&("MEGABLAST", "on".to_string())));
        assert!(!form.iter().any(|(_, v)| v == "megablast"));
    }

    #[test]
    fn test_database_override_wins() {
        let mut params = SubmitParams::new(Program::Blastn, "ACGT");
        params.database = Some("refseq_rna".to_string());
        assert_eq!(params.database(), "refseq_rna");
    }
}
