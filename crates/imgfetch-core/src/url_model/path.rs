//! Filename extraction from URL path.

use percent_encoding::percent_decode_str;

/// Extracts the final path component of a URL for use as a filename hint.
///
/// Only the text after the last `/` counts, so a path ending in `/` yields
/// nothing. The component is percent-decoded (lossy on invalid UTF-8).
/// Returns `None` if the URL cannot be parsed or the component is empty.
pub fn filename_from_url_path(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    let segment = parsed.path().rsplit('/').next()?;
    if segment.is_empty() {
        return None;
    }
    let decoded = percent_decode_str(segment).decode_utf8_lossy();
    if decoded.is_empty() || decoded == "." || decoded == ".." {
        return None;
    }
    Some(decoded.into_owned())
}
