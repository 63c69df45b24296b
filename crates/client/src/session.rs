//! Persisted cookie jar.
//!
//! Job ownership on the BLAST service is tied to session cookies, so the
//! jar is written to a fixed path under the user's cache directory and
//! reloaded on the next invocation. The on-disk format is private to this
//! client. The file is created empty on first use; it is never locked, so
//! concurrent invocations race on it, an accepted limitation.

use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use cookie_store::CookieStore;
use tracing::debug;

use crate::error::{ClientError, Result};

/// Loads and saves the cookie jar at a well-known path.
#[derive(Debug, Clone)]
pub struct CookieCache {
    path: PathBuf,
}

impl CookieCache {
    /// Cache at the default per-user location.
    pub fn new() -> Result<Self> {
        Ok(CookieCache {
            path: Self::default_path()?,
        })
    }

    /// Cache at an explicit path (tests point this at a temp dir).
    pub fn at(path: impl Into<PathBuf>) -> Self {
        CookieCache { path: path.into() }
    }

    /// `<user cache dir>/webblast/cookies.json`.
    pub fn default_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("", "", "webblast").ok_or_else(|| {
            ClientError::CookieStore("could not determine a cache directory".to_string())
        })?;
        Ok(dirs.cache_dir().join("cookies.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the jar from disk.
    ///
    /// A missing file is not an error: it is created empty and an empty
    /// jar is returned. Failure to create the parent directory propagates.
    pub fn load(&self) -> Result<CookieStore> {
        if !self.path.exists() {
            if let Some(parent) = self.path.parent() {
                fs::create_dir_all(parent)?;
            }
            File::create(&self.path)?;
            debug!(path = %self.path.display(), "created empty cookie cache");
            return Ok(CookieStore::default());
        }
        let reader = BufReader::new(File::open(&self.path)?);
        CookieStore::load_json(reader).map_err(|e| ClientError::CookieStore(e.to_string()))
    }

    /// Overwrite the file with the current cookie set.
    pub fn save(&self, store: &CookieStore) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut writer = File::create(&self.path)?;
        store
            .save_json(&mut writer)
            .map_err(|e| ClientError::CookieStore(e.to_string()))?;
        debug!(path = %self.path.display(), "saved cookie cache");
        Ok(())
    }
}
