//! Console presentation of fetch outcomes.
//!
//! The pipeline never prints; everything user-facing is rendered here.

use crate::pipeline::FetchOutcome;
use std::fmt;

pub const BANNER: &str = "Welcome to the Ubuntu Image Fetcher";
pub const TAGLINE: &str = "A tool for mindfully collecting images from the web";
pub const PROMPT: &str = "Enter one or more image URLs (separated by spaces): ";
pub const FAREWELL: &str = "Connection strengthened. Community enriched.";

/// Status lines for one outcome, in print order.
pub fn lines(outcome: &FetchOutcome) -> Vec<String> {
    match outcome {
        FetchOutcome::Saved { file_name, path } => vec![
            format!("✓ Successfully fetched: {file_name}"),
            format!("✓ Saved to {}", path.display()),
        ],
        FetchOutcome::Duplicate { file_name, .. } => {
            vec![format!("⚠ Duplicate detected, skipped: {file_name}")]
        }
        FetchOutcome::NotAnImage { url, content_type } => {
            vec![format!("✗ Not an image: {url} ({content_type})")]
        }
        FetchOutcome::ConnectionError { error, .. } => {
            vec![format!("✗ Connection error: {error}")]
        }
        FetchOutcome::Failed { error, .. } => vec![format!("✗ Unexpected error: {error}")],
    }
}

/// Tally of outcomes for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub saved: usize,
    pub duplicates: usize,
    pub rejected: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn from_outcomes(outcomes: &[FetchOutcome]) -> Self {
        let mut s = RunSummary::default();
        for o in outcomes {
            match o {
                FetchOutcome::Saved { .. } => s.saved += 1,
                FetchOutcome::Duplicate { .. } => s.duplicates += 1,
                FetchOutcome::NotAnImage { .. } => s.rejected += 1,
                FetchOutcome::ConnectionError { .. } | FetchOutcome::Failed { .. } => {
                    s.failed += 1
                }
            }
        }
        s
    }

    pub fn total(&self) -> usize {
        self.saved + self.duplicates + self.rejected + self.failed
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} URL(s): {} saved, {} duplicate, {} not an image, {} failed",
            self.total(),
            self.saved,
            self.duplicates,
            self.rejected,
            self.failed
        )
    }
}
