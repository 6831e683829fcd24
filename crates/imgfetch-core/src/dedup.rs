//! Content-addressed unique filenames.
//!
//! A payload's short digest is inserted before the extension of the
//! candidate filename. Identical bytes under the same candidate name always
//! map to the same stored name, which is what the duplicate check keys on.

use crate::checksum;
use crate::url_model::{truncate_to_boundary, NAME_MAX};

/// Splits `name` into stem and extension (extension includes the dot).
///
/// The extension starts at the last `.`, unless that dot is the first
/// character of the name: `.hidden` has no extension.
pub fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(idx) if idx > 0 && !name[..idx].chars().all(|c| c == '.') => {
            name.split_at(idx)
        }
        _ => (name, ""),
    }
}

/// Returns `original_filename` with the short content digest of `content`
/// inserted before the extension (`photo.jpg` → `photo_1a2b3c4d.jpg`).
///
/// The result never exceeds [`NAME_MAX`] bytes: the stem is shortened to make
/// room for the tag, and an extension too long to keep is folded into the stem.
pub fn unique_filename(content: &[u8], original_filename: &str) -> String {
    let tag = checksum::short_digest(content);
    let (stem, ext) = split_extension(original_filename);
    let tag_len = tag.len() + 1;
    let (stem, ext) = if ext.len() + tag_len < NAME_MAX {
        (stem, ext)
    } else {
        (original_filename, "")
    };
    let stem = truncate_to_boundary(stem, NAME_MAX - tag_len - ext.len());
    format!("{stem}_{tag}{ext}")
}
