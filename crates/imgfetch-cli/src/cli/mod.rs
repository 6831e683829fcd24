//! CLI for the imgfetch image fetcher.

mod prompt;

use anyhow::Result;
use clap::Parser;
use imgfetch_core::config::{self, FetcherConfig};
use imgfetch_core::report::{self, RunSummary};
use imgfetch_core::Fetcher;
use std::io::{self, Write};
use std::path::PathBuf;

/// Fetch images from the web into a local directory, skipping duplicates.
#[derive(Debug, Parser)]
#[command(name = "imgfetch")]
#[command(about = "Fetch images by URL, deduplicated by content hash", long_about = None)]
pub struct Cli {
    /// Image URLs to fetch. When omitted, URLs are read from a prompt on stdin.
    #[arg(value_name = "URL")]
    pub urls: Vec<String>,

    /// Directory to save images into (overrides `output_dir` from config).
    #[arg(long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Per-request timeout in seconds (overrides `timeout_secs` from config).
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        Cli::parse().run()
    }

    /// Apply command-line overrides on top of the loaded config.
    pub fn apply_overrides(&self, cfg: &mut FetcherConfig) {
        if let Some(dir) = &self.dir {
            cfg.output_dir = dir.clone();
        }
        if let Some(secs) = self.timeout {
            cfg.timeout_secs = secs;
        }
    }

    fn run(self) -> Result<()> {
        let mut cfg = match config::load_or_init() {
            Ok(cfg) => cfg,
            Err(err) => {
                tracing::warn!("config unavailable, using defaults: {:#}", err);
                eprintln!("imgfetch: using default settings ({:#})", err);
                FetcherConfig::default()
            }
        };
        self.apply_overrides(&mut cfg);
        tracing::debug!("effective config: {:?}", cfg);

        let stdout = io::stdout();
        let mut out = stdout.lock();
        write_banner(&mut out)?;

        let urls = if self.urls.is_empty() {
            prompt::read_urls(io::stdin().lock(), &mut out)?
        } else {
            self.urls
        };

        let fetcher = Fetcher::new(&cfg);
        let summary = fetch_and_report(&fetcher, &urls, &mut out)?;
        tracing::info!("run finished: {}", summary);
        Ok(())
    }
}

/// Print the welcome banner followed by a blank line.
pub(crate) fn write_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", report::BANNER)?;
    writeln!(out, "{}\n", report::TAGLINE)
}

/// Fetch each URL in order, printing its status lines as it completes, then
/// the run summary (only when more than one URL ran) and the closing line.
pub(crate) fn fetch_and_report<W: Write>(
    fetcher: &Fetcher,
    urls: &[String],
    out: &mut W,
) -> Result<RunSummary> {
    let mut outcomes = Vec::with_capacity(urls.len());
    for url in urls {
        let outcome = fetcher.fetch_one(url);
        for line in report::lines(&outcome) {
            writeln!(out, "{line}")?;
        }
        outcomes.push(outcome);
    }

    let summary = RunSummary::from_outcomes(&outcomes);
    if summary.total() > 1 {
        writeln!(out, "\n{}", summary)?;
    }
    writeln!(out, "\n{}", report::FAREWELL)?;
    Ok(summary)
}
