//! Per-URL fetch pipeline: request, validate, dedup, save.
//!
//! Each URL ends in exactly one [`FetchOutcome`]. Failures are local to their
//! URL; [`Fetcher::fetch_all`] always processes the whole list in order.

use crate::config::FetcherConfig;
use crate::dedup;
use crate::error::FetchError;
use crate::fetch::{self, FetchOptions};
use crate::storage::{self, Persisted};
use crate::url_model;
use std::path::{Path, PathBuf};

/// Terminal state of one URL.
#[derive(Debug)]
pub enum FetchOutcome {
    /// Image written to `path`.
    Saved { file_name: String, path: PathBuf },
    /// A file with the same unique name already existed; nothing written.
    Duplicate { file_name: String, path: PathBuf },
    /// Response declared a non-image content type (empty if absent).
    NotAnImage { url: String, content_type: String },
    /// Transport failure or non-2xx status.
    ConnectionError { url: String, error: FetchError },
    /// Anything else, e.g. the destination could not be written.
    Failed { url: String, error: FetchError },
}

impl FetchOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, FetchOutcome::Saved { .. })
    }

    pub fn is_duplicate(&self) -> bool {
        matches!(self, FetchOutcome::Duplicate { .. })
    }

    /// Path of the stored file for saved and duplicate outcomes.
    pub fn path(&self) -> Option<&Path> {
        match self {
            FetchOutcome::Saved { path, .. } | FetchOutcome::Duplicate { path, .. } => {
                Some(path)
            }
            _ => None,
        }
    }
}

/// Runs the pipeline against a fixed destination directory.
#[derive(Debug, Clone)]
pub struct Fetcher {
    output_dir: PathBuf,
    default_filename: String,
    options: FetchOptions,
}

impl Fetcher {
    pub fn new(cfg: &FetcherConfig) -> Self {
        Self {
            output_dir: cfg.output_dir.clone(),
            default_filename: cfg.default_filename.clone(),
            options: FetchOptions::from(cfg),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Fetch every URL in order, continuing past failures.
    pub fn fetch_all<I, S>(&self, urls: I) -> Vec<FetchOutcome>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        urls.into_iter().map(|u| self.fetch_one(u.as_ref())).collect()
    }

    /// Fetch a single URL and store it if it is a new image.
    pub fn fetch_one(&self, url: &str) -> FetchOutcome {
        let outcome = match self.try_fetch(url) {
            Ok(outcome) => outcome,
            Err(error) if error.is_connection() => FetchOutcome::ConnectionError {
                url: url.to_string(),
                error,
            },
            Err(error) => FetchOutcome::Failed {
                url: url.to_string(),
                error,
            },
        };
        log_outcome(url, &outcome);
        outcome
    }

    fn try_fetch(&self, url: &str) -> Result<FetchOutcome, FetchError> {
        storage::ensure_dir(&self.output_dir)?;

        let response = fetch::get(url, &self.options)?;

        let content_type = response.headers.content_type.clone().unwrap_or_default();
        if !fetch::is_image_content_type(&content_type) {
            return Ok(FetchOutcome::NotAnImage {
                url: url.to_string(),
                content_type,
            });
        }

        let candidate = url_model::derive_filename(url, &self.default_filename);
        let file_name = dedup::unique_filename(&response.body, &candidate);
        let path = self.output_dir.join(&file_name);

        Ok(match storage::persist_new(&path, &response.body)? {
            Persisted::Saved(path) => FetchOutcome::Saved { file_name, path },
            Persisted::AlreadyPresent(path) => FetchOutcome::Duplicate { file_name, path },
        })
    }
}

fn log_outcome(url: &str, outcome: &FetchOutcome) {
    match outcome {
        FetchOutcome::Saved { path, .. } => {
            tracing::info!(url, path = %path.display(), "saved image");
        }
        FetchOutcome::Duplicate { path, .. } => {
            tracing::info!(url, path = %path.display(), "duplicate, skipped");
        }
        FetchOutcome::NotAnImage { content_type, .. } => {
            tracing::info!(url, content_type = %content_type, "not an image");
        }
        FetchOutcome::ConnectionError { error, .. } => {
            tracing::warn!(url, timeout = error.is_timeout(), "connection error: {}", error);
        }
        FetchOutcome::Failed { error, .. } => {
            tracing::warn!(url, "fetch failed: {}", error);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetcher_takes_config() {
        let cfg = FetcherConfig {
            output_dir: PathBuf::from("/tmp/imgs"),
            ..FetcherConfig::default()
        };
        let f = Fetcher::new(&cfg);
        assert_eq!(f.output_dir(), Path::new("/tmp/imgs"));
        assert_eq!(f.default_filename, "downloaded_image.jpg");
    }

    #[test]
    fn unwritable_destination_is_failed_not_connection() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not_a_dir");
        std::fs::write(&blocker, b"").unwrap();
        let cfg = FetcherConfig {
            output_dir: blocker.join("images"),
            ..FetcherConfig::default()
        };

        let outcome = Fetcher::new(&cfg).fetch_one("http://127.0.0.1:9/cat.png");
        match outcome {
            FetchOutcome::Failed { url, error } => {
                assert_eq!(url, "http://127.0.0.1:9/cat.png");
                assert!(matches!(error, FetchError::Io { .. }));
            }
            other => panic!("expected Failed, got {:?}", other),
        }
    }

    #[test]
    fn outcome_path_accessor() {
        let saved = FetchOutcome::Saved {
            file_name: "a_1.png".into(),
            path: PathBuf::from("d/a_1.png"),
        };
        assert!(saved.is_saved());
        assert_eq!(saved.path(), Some(Path::new("d/a_1.png")));
        let rejected = FetchOutcome::NotAnImage {
            url: "u".into(),
            content_type: "text/html".into(),
        };
        assert!(!rejected.is_saved());
        assert!(rejected.path().is_none());
    }
}
