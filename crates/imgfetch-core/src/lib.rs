pub mod config;
pub mod logging;

pub mod checksum;
pub mod dedup;
pub mod error;
pub mod fetch;
pub mod pipeline;
pub mod report;
pub mod storage;
pub mod url_model;

pub use config::FetcherConfig;
pub use error::FetchError;
pub use pipeline::{FetchOutcome, Fetcher};
