//! Parse HTTP response header lines into ResponseHeaders.

/// Headers of the final response that the pipeline cares about.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseHeaders {
    /// `Content-Type` value if present.
    pub content_type: Option<String>,
    /// Declared size in bytes, if `Content-Length` is present.
    pub content_length: Option<u64>,
}

/// Parse collected header lines into ResponseHeaders.
///
/// libcurl reports the headers of every response in a redirect chain; each
/// status line starts a new block, so only the last block is kept.
pub(crate) fn parse_headers(lines: &[String]) -> ResponseHeaders {
    let mut out = ResponseHeaders::default();

    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with("HTTP/") {
            out = ResponseHeaders::default();
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            let name = name.trim();
            let value = value.trim();
            if name.eq_ignore_ascii_case("content-type") {
                out.content_type = Some(value.to_string());
            }
            if name.eq_ignore_ascii_case("content-length") {
                if let Ok(n) = value.parse::<u64>() {
                    out.content_length = Some(n);
                }
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parse_headers_content_type_and_length() {
        let r = parse_headers(&lines(&[
            "HTTP/1.1 200 OK",
            "Content-Type: image/png",
            "Content-Length: 12345",
        ]));
        assert_eq!(r.content_type.as_deref(), Some("image/png"));
        assert_eq!(r.content_length, Some(12345));
    }

    #[test]
    fn parse_headers_case_insensitive_names() {
        let r = parse_headers(&lines(&["content-type: image/webp"]));
        assert_eq!(r.content_type.as_deref(), Some("image/webp"));
        assert!(r.content_length.is_none());
    }

    #[test]
    fn parse_headers_keeps_last_response_of_redirect_chain() {
        let r = parse_headers(&lines(&[
            "HTTP/1.1 302 Found",
            "Location: /real.jpg",
            "Content-Type: text/html",
            "",
            "HTTP/1.1 200 OK",
            "Content-Type: image/jpeg",
        ]));
        assert_eq!(r.content_type.as_deref(), Some("image/jpeg"));
    }

    #[test]
    fn parse_headers_missing_content_type() {
        let r = parse_headers(&lines(&["HTTP/1.1 200 OK", "Content-Length: 3"]));
        assert!(r.content_type.is_none());
    }
}
