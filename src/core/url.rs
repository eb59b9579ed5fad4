//! URL normalization and validation.
//!
//! Both CLI profiles funnel their input through this module: `quick`
//! normalizes leniently, `encode` validates strictly. The checks mirror
//! what browsers accept for scannable links: an http(s) scheme and a host.

use url::Url;

use crate::error::{Error, Result};

/// Fallback payload when the user provides no URL at all.
pub const DEFAULT_URL: &str = "https://github.com/bogwi/qrgen";

/// Normalize raw user input into an encodable URL.
///
/// Trims surrounding whitespace, substitutes [`DEFAULT_URL`] for empty
/// input, and prepends `https://` when no http(s) scheme is present.
pub fn normalize(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return DEFAULT_URL.to_string();
    }
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    }
}

/// Whether `candidate` parses as an http(s) URL with a non-empty host.
pub fn is_valid(candidate: &str) -> bool {
    match Url::parse(candidate) {
        Ok(parsed) => {
            matches!(parsed.scheme(), "http" | "https")
                && parsed.host_str().is_some_and(|h| !h.is_empty())
        }
        Err(_) => false,
    }
}

/// Strict variant of [`is_valid`] returning [`Error::InvalidUrl`] on failure.
pub fn validate(candidate: &str) -> Result<()> {
    if is_valid(candidate) {
        Ok(())
    } else {
        Err(Error::InvalidUrl {
            url: candidate.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_prepends_scheme_once() {
        assert_eq!(normalize("example.com"), "https://example.com");
        assert_eq!(normalize("https://example.com"), "https://example.com");
        assert_eq!(normalize("http://example.com"), "http://example.com");
    }

    #[test]
    fn normalize_trims_whitespace() {
        assert_eq!(normalize("  example.com  "), "https://example.com");
        assert_eq!(normalize("\thttps://example.com\n"), "https://example.com");
    }

    #[test]
    fn normalize_empty_input_yields_default() {
        assert_eq!(normalize(""), DEFAULT_URL);
        assert_eq!(normalize("   "), DEFAULT_URL);
        assert_eq!(normalize("\t\n"), DEFAULT_URL);
    }

    #[test]
    fn valid_http_and_https_urls() {
        assert!(is_valid("https://example.com"));
        assert!(is_valid("http://example.com/path?q=1"));
        assert!(is_valid("https://sub.example.co.uk"));
    }

    #[test]
    fn invalid_scheme_rejected() {
        assert!(!is_valid("ftp://x.com"));
        assert!(!is_valid("file:///etc/passwd"));
        assert!(!is_valid("mailto:user@example.com"));
    }

    #[test]
    fn invalid_strings_rejected() {
        assert!(!is_valid("notaurl"));
        assert!(!is_valid("not a url"));
        assert!(!is_valid(""));
        assert!(!is_valid("https://"));
    }

    #[test]
    fn validate_names_the_offending_url() {
        let err = validate("notaurl").unwrap_err();
        assert!(err.to_string().contains("notaurl"));
    }
}
