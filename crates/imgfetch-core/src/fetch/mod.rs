//! Buffered HTTP GET.
//!
//! Uses the curl crate (libcurl) to fetch a URL into memory with bounded
//! connect and total timeouts, following redirects, and captures the response
//! headers needed to validate the payload.

mod parse;

use crate::config::FetcherConfig;
use crate::error::FetchError;
use std::str;
use std::time::Duration;

pub use parse::ResponseHeaders;

/// Transfer limits for one GET.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// Upper bound on the whole transfer, connect included.
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub max_redirects: u32,
    pub user_agent: Option<String>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self::from(&FetcherConfig::default())
    }
}

impl From<&FetcherConfig> for FetchOptions {
    /// Zero seconds means "no limit" to libcurl, so timeouts are at least 1s.
    fn from(cfg: &FetcherConfig) -> Self {
        Self {
            timeout: Duration::from_secs(cfg.timeout_secs.max(1)),
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs.max(1)),
            max_redirects: cfg.max_redirects,
            user_agent: cfg.user_agent.clone(),
        }
    }
}

/// A completed 2xx response with its body fully buffered.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u32,
    pub headers: ResponseHeaders,
    pub body: Vec<u8>,
}

/// Performs a GET and returns the buffered response.
///
/// Follows up to `max_redirects` redirects; headers are taken from the final
/// response. Non-2xx status is an error. Runs in the current thread.
pub fn get(url: &str, opts: &FetchOptions) -> Result<HttpResponse, FetchError> {
    let mut headers: Vec<String> = Vec::new();
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.get(true)?;
    easy.follow_location(true)?;
    easy.max_redirections(opts.max_redirects)?;
    easy.connect_timeout(opts.connect_timeout)?;
    easy.timeout(opts.timeout)?;
    if let Some(ua) = &opts.user_agent {
        easy.useragent(ua)?;
    }

    {
        let mut transfer = easy.transfer();
        transfer.header_function(|data| {
            if let Ok(s) = str::from_utf8(data) {
                headers.push(s.trim_end().to_string());
            }
            true
        })?;
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let code = easy.response_code()?;
    if !(200..300).contains(&code) {
        tracing::debug!(url, code, "GET returned non-success status");
        return Err(FetchError::Http(code));
    }

    let headers = parse::parse_headers(&headers);
    tracing::debug!(
        url,
        code,
        bytes = body.len(),
        content_type = headers.content_type.as_deref().unwrap_or(""),
        "GET completed"
    );

    Ok(HttpResponse {
        status: code,
        headers,
        body,
    })
}

/// True if a declared `Content-Type` names an image (`image/*`, any case).
pub fn is_image_content_type(content_type: &str) -> bool {
    content_type
        .trim_start()
        .get(..6)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("image/"))
}
