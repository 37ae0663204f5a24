//! URL canonicalization

use url::{ParseError, Url};

/// Query parameters that only carry tracking information
const TRACKING_PARAMS: &[&str] = &["gclid", "fbclid"];

fn is_tracking_param(key: &str) -> bool {
    let key = key.to_ascii_lowercase();
    key.starts_with("utm_") || TRACKING_PARAMS.contains(&key.as_str())
}

/// Canonical form of a URL, used as the item's identity key.
///
/// Lowercases the host, defaults the scheme to `https`, drops the fragment
/// and removes `utm_*`, `gclid` and `fbclid` query parameters. Input that
/// cannot be parsed as a URL is returned trimmed but otherwise unchanged.
pub fn canonical_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let parsed = match Url::parse(trimmed) {
        Ok(url) => Ok(url),
        Err(ParseError::RelativeUrlWithoutBase) => Url::parse(&format!("https://{trimmed}")),
        Err(e) => Err(e),
    };

    let mut url = match parsed {
        Ok(url) => url,
        Err(_) => return trimmed.to_string(),
    };

    url.set_fragment(None);

    if url.query().is_some() {
        let retained: Vec<(String, String)> = url
            .query_pairs()
            .filter(|(key, _)| !is_tracking_param(key))
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();

        if retained.is_empty() {
            url.set_query(None);
        } else {
            url.query_pairs_mut().clear().extend_pairs(retained);
        }
    }

    url.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_tracking_params() {
        assert_eq!(
            canonical_url("https://example.com/story?utm_source=x&utm_medium=email"),
            "https://example.com/story"
        );
        assert_eq!(
            canonical_url("https://example.com/story?id=7&gclid=abc&fbclid=def"),
            "https://example.com/story?id=7"
        );
    }

    #[test]
    fn test_lowercases_host_and_drops_fragment() {
        assert_eq!(
            canonical_url("https://News.Example.COM/Path/A#section-2"),
            "https://news.example.com/Path/A"
        );
    }

    #[test]
    fn test_defaults_scheme() {
        assert_eq!(canonical_url("example.com/a"), "https://example.com/a");
    }

    #[test]
    fn test_same_story_same_key() {
        let a = canonical_url("https://example.com/a?utm_campaign=launch");
        let b = canonical_url("https://EXAMPLE.com/a#top");
        assert_eq!(a, b);
    }

    #[test]
    fn test_unparseable_returned_unchanged() {
        assert_eq!(canonical_url("  not a url  "), "not a url");
        assert_eq!(canonical_url(""), "");
    }
}
