//! Linux-safe filename sanitization.

/// Characters that are legal on Linux but awkward in shells or on other
/// filesystems the images may be copied to.
const RESERVED: &[char] = &['<', '>', ':', '"', '|', '?', '*'];

/// Linux NAME_MAX in bytes.
pub const NAME_MAX: usize = 255;

/// Sanitizes a candidate filename for safe use on Linux.
///
/// - Trims leading/trailing whitespace and dots
/// - Replaces NUL, `/`, `\`, control characters, whitespace and reserved
///   characters with `_` (one `_` per character)
/// - Limits length to [`NAME_MAX`] bytes
///
/// Names made only of safe characters pass through unchanged.
pub fn sanitize_filename_for_linux(name: &str) -> String {
    let trimmed = name.trim_matches(|c: char| c.is_whitespace() || c == '.');

    let out: String = trimmed
        .chars()
        .map(|c| {
            if c == '\0' || c == '/' || c == '\\' || c.is_control() {
                '_'
            } else if c.is_whitespace() || RESERVED.contains(&c) {
                '_'
            } else {
                c
            }
        })
        .collect();

    truncate_to_boundary(&out, NAME_MAX).to_string()
}

/// Longest prefix of `s` that is at most `max` bytes and ends on a char boundary.
pub(crate) fn truncate_to_boundary(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut take = max;
    while take > 0 && !s.is_char_boundary(take) {
        take -= 1;
    }
    &s[..take]
}
