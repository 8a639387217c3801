//! Syntactic URL validation.
//!
//! The pattern is inherited behavior, not RFC 3986: it accepts an optional
//! `http(s)://` scheme and `www.` prefix, a permissive host label, a dot, a
//! short top-level label, and an optional path/query/fragment tail. Treat a
//! match as "looks like a URL", nothing stronger.

use std::sync::LazyLock;

use regex::Regex;

static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(https?://)?(www\.)?[-a-zA-Z0-9@:%._+~#=]{1,256}\.[a-zA-Z0-9()]{1,6}\b([-a-zA-Z0-9()@:%_+.~#?&/=]*)$",
    )
    .expect("URL pattern is a valid regex")
});

/// Whether `text` matches the URL pattern.
///
/// Pure and total: always returns a boolean, never touches the network,
/// performs no normalization.
pub fn is_valid_url(text: &str) -> bool {
    URL_PATTERN.is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http_and_https() {
        assert!(is_valid_url("https://example.com"));
        assert!(is_valid_url("http://example.com"));
    }

    #[test]
    fn test_accepts_www_without_scheme() {
        assert!(is_valid_url("www.example.com"));
    }

    #[test]
    fn test_accepts_bare_domain() {
        // Scheme-less, www-less input is accepted by the pattern.
        assert!(is_valid_url("example.com"));
    }

    #[test]
    fn test_accepts_path_query_fragment() {
        assert!(is_valid_url("https://www.example.com/path?q=1#fragment"));
        assert!(is_valid_url("https://sub.domain.example.co.uk/a/b"));
    }

    #[test]
    fn test_rejects_non_urls() {
        assert!(!is_valid_url("not a url"));
        assert!(!is_valid_url(""));
        assert!(!is_valid_url("http://example"));
    }

    #[test]
    fn test_rejects_other_schemes() {
        // The slashes after a non-http scheme fall outside the host
        // character class, so the whole match fails.
        assert!(!is_valid_url("ftp://example.com"));
    }

    #[test]
    fn test_rejects_surrounding_whitespace() {
        assert!(!is_valid_url(" https://example.com"));
        assert!(!is_valid_url("https://example.com "));
    }
}
