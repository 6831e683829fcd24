//! URL modeling and filename derivation.
//!
//! Derives safe local filenames from the last URL path component, sanitized
//! for Linux filesystems.

mod path;
mod sanitize;

pub use path::filename_from_url_path;
pub use sanitize::{sanitize_filename_for_linux, NAME_MAX};
pub(crate) use sanitize::truncate_to_boundary;

/// Default filename when the URL path yields nothing usable.
pub const DEFAULT_FILENAME: &str = "downloaded_image.jpg";

/// Derives a safe filename for saving an image fetched from `url`.
///
/// Uses the last path component of `url` (percent-decoded), falling back to
/// `default_name` when the component is empty or the URL does not parse. The
/// result is sanitized for Linux (no `/`, NUL, control or reserved chars; no
/// leading/trailing dots or spaces; reserved names like "." or ".." replaced).
///
/// # Examples
///
/// - `derive_filename("https://example.com/a/b/photo.jpg", DEFAULT_FILENAME)` → `"photo.jpg"`
/// - `derive_filename("https://example.com/", DEFAULT_FILENAME)` → `"downloaded_image.jpg"`
pub fn derive_filename(url: &str, default_name: &str) -> String {
    let raw = match filename_from_url_path(url) {
        Some(c) => c,
        None => return default_name.to_string(),
    };

    let sanitized = sanitize_filename_for_linux(&raw);
    if sanitized.is_empty() || sanitized == "." || sanitized == ".." {
        default_name.to_string()
    } else {
        sanitized
    }
}
