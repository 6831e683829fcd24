//! Error kinds for a single fetch.

use std::path::PathBuf;

/// Failure while fetching or storing one URL.
///
/// Content-type rejections and duplicates are not errors; they are reported
/// as [`crate::pipeline::FetchOutcome`] variants.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Curl reported an error (timeout, DNS, connection refused, etc.).
    #[error("{0}")]
    Transport(#[from] curl::Error),
    /// HTTP response had a non-2xx status.
    #[error("HTTP {0}")]
    Http(u32),
    /// Filesystem failure creating the destination or writing the image.
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FetchError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FetchError::Io {
            path: path.into(),
            source,
        }
    }

    /// True for network-level failures: transport errors and bad HTTP status.
    pub fn is_connection(&self) -> bool {
        matches!(self, FetchError::Transport(_) | FetchError::Http(_))
    }

    /// True if curl gave up because the request timed out.
    pub fn is_timeout(&self) -> bool {
        matches!(self, FetchError::Transport(e) if e.is_operation_timedout())
    }
}
