//! Main BLAST URL API client.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use reqwest_cookie_store::CookieStoreMutex;
use tracing::info;

use crate::endpoints::{self, SubmitParams};
use crate::error::{ClientError, Result};
use crate::joblist::{self, JobRow};
use crate::models::{JobStatus, ReportFormat, Rid};
use crate::report;
use crate::session::CookieCache;

/// Production endpoint of the BLAST URL API.
pub const DEFAULT_BASE_URL: &str = "https://blast.ncbi.nlm.nih.gov/blast";

/// Delay between status polls while a job is WAITING.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Builder for creating a new [`BlastClient`].
pub struct BlastClientBuilder {
    base_url: String,
    timeout: Option<Duration>,
    poll_interval: Duration,
    use_cache: bool,
    cookie_path: Option<PathBuf>,
}

impl Default for BlastClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            poll_interval: DEFAULT_POLL_INTERVAL,
            use_cache: true,
            cookie_path: None,
        }
    }
}

impl BlastClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the BLAST service.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set a request timeout. When unset the transport default applies
    /// and a hung request blocks indefinitely.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the delay between status polls.
    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Enable or disable the persisted cookie session.
    pub fn use_cache(mut self, use_cache: bool) -> Self {
        self.use_cache = use_cache;
        self
    }

    /// Override the cookie cache path (tests point this at a temp dir).
    pub fn cookie_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.cookie_path = Some(path.into());
        self
    }

    /// Build the client, loading the persisted jar when caching is on.
    pub fn build(self) -> Result<BlastClient> {
        let base_url = self.base_url.trim_end_matches('/').to_string();

        let mut http_builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            http_builder = http_builder.timeout(timeout);
        }

        let session = if self.use_cache {
            let cache = match self.cookie_path {
                Some(path) => CookieCache::at(path),
                None => CookieCache::new()?,
            };
            let jar = Arc::new(CookieStoreMutex::new(cache.load()?));
            http_builder = http_builder.cookie_provider(Arc::clone(&jar));
            Some(Session { jar, cache })
        } else {
            None
        };

        Ok(BlastClient {
            http: http_builder.build()?,
            base_url,
            session,
            poll_interval: self.poll_interval,
        })
    }
}

/// The in-memory jar plus the cache file backing it.
struct Session {
    jar: Arc<CookieStoreMutex>,
    cache: CookieCache,
}

impl Session {
    fn save(&self) -> Result<()> {
        let store = self
            .jar
            .lock()
            .map_err(|_| ClientError::CookieStore("cookie jar lock poisoned".to_string()))?;
        self.cache.save(&store)
    }
}

/// Client for the BLAST URL API.
///
/// All operations are single synchronous-in-effect POSTs to `Blast.cgi`;
/// the only state carried between invocations is the cookie session.
pub struct BlastClient {
    http: reqwest::Client,
    base_url: String,
    session: Option<Session>,
    poll_interval: Duration,
}

impl BlastClient {
    /// Create a new client builder.
    pub fn builder() -> BlastClientBuilder {
        BlastClientBuilder::new()
    }

    /// Submit a search and return its request identifier.
    ///
    /// With caching enabled the session cookies are persisted after a
    /// successful submission; a rejected submission persists nothing.
    pub async fn submit(&self, params: &SubmitParams) -> Result<Rid> {
        let rid = endpoints::submit_job(&self.http, &self.base_url, params).await?;
        info!(%rid, "search submitted");
        if let Some(session) = &self.session {
            session.save()?;
        }
        Ok(rid)
    }

    /// Fetch and classify the status of a job.
    pub async fn get_status(&self, rid: &Rid) -> Result<JobStatus> {
        endpoints::fetch_status(&self.http, &self.base_url, rid).await
    }

    /// Retrieve the result document for a finished job.
    ///
    /// The boilerplate prefix is stripped unconditionally; when
    /// `max_targets` is set the format-specific truncation heuristic is
    /// applied, otherwise the stripped body is returned verbatim (plus a
    /// trailing newline).
    pub async fn retrieve(
        &self,
        rid: &Rid,
        format: ReportFormat,
        max_targets: Option<usize>,
    ) -> Result<String> {
        let body = endpoints::fetch_report(&self.http, &self.base_url, rid, format).await?;
        let text = report::strip_boilerplate(&body);
        Ok(match max_targets {
            None => {
                let mut out = text.to_string();
                out.push('\n');
                out
            }
            Some(max) => match format {
                ReportFormat::Text => report::truncate_text(text, max),
                ReportFormat::Tabular => report::truncate_tabular(text, max),
            },
        })
    }

    /// List the cached session's recent jobs: a header row of column
    /// names, then one row per job in document order.
    pub async fn list_recent_jobs(&self) -> Result<Vec<JobRow>> {
        let html = endpoints::fetch_recent(&self.http, &self.base_url).await?;
        Ok(joblist::parse_job_table(&html))
    }

    /// Delay between status polls.
    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
