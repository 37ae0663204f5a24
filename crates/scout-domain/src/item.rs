//! Candidate item module - the unit the pipeline ranks

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Naive layouts accepted after RFC 3339 and RFC 2822 fail
const NAIVE_DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

/// A normalized editorial signal supplied by the feed layer
///
/// The `url` is the item's identity. The `date` is kept as the raw string the
/// feed supplied: a date that cannot be parsed is a recoverable per-item
/// problem, not a construction error.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateItem {
    /// Headline
    pub title: String,

    /// Body text or abstract (may be empty)
    pub summary: String,

    /// Link to the item, used as its identity
    pub url: String,

    /// Publication name
    pub source: String,

    /// Coarse credibility category of the source (e.g. "trade", "policy")
    pub tier: String,

    /// Publication timestamp as supplied by the feed
    pub date: String,
}

impl CandidateItem {
    /// Create a new candidate item
    pub fn new(
        title: impl Into<String>,
        summary: impl Into<String>,
        url: impl Into<String>,
        source: impl Into<String>,
        tier: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            summary: summary.into(),
            url: url.into(),
            source: source.into(),
            tier: tier.into(),
            date: date.into(),
        }
    }

    /// Title and summary joined the way every text rule reads them
    pub fn text(&self) -> String {
        format!("{}. {}", self.title, self.summary)
    }

    /// Parse the publication date
    ///
    /// Accepts RFC 3339, RFC 2822, `YYYY-MM-DD HH:MM:SS` and `YYYY-MM-DD`.
    /// Naive values are taken as UTC. Returns `None` when nothing matches.
    ///
    /// # Examples
    ///
    /// ```
    /// use scout_domain::CandidateItem;
    ///
    /// let mut item = CandidateItem::new("t", "", "https://a.example/1", "A", "trade", "2025-03-01");
    /// assert!(item.published_at().is_some());
    ///
    /// item.date = "last tuesday".to_string();
    /// assert!(item.published_at().is_none());
    /// ```
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.date)
    }
}

/// Parse a feed timestamp into UTC
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    fn item_dated(date: &str) -> CandidateItem {
        CandidateItem::new("Title", "Summary", "https://example.org/a", "Example", "trade", date)
    }

    #[test]
    fn test_text_joins_title_and_summary() {
        let item = item_dated("2025-01-01");
        assert_eq!(item.text(), "Title. Summary");
    }

    #[test]
    fn test_parse_rfc3339_with_offset() {
        let dt = item_dated("2025-03-01T10:00:00+02:00").published_at().unwrap();
        assert_eq!(dt.hour(), 8);
    }

    #[test]
    fn test_parse_rfc2822() {
        let dt = item_dated("Tue, 04 Mar 2025 09:30:00 GMT").published_at().unwrap();
        assert_eq!(dt.day(), 4);
        assert_eq!(dt.minute(), 30);
    }

    #[test]
    fn test_parse_naive_datetime_as_utc() {
        let dt = item_dated("2025-03-05 12:00:00").published_at().unwrap();
        assert_eq!(dt.hour(), 12);
    }

    #[test]
    fn test_parse_plain_date() {
        let dt = item_dated("2025-03-06").published_at().unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (2025, 3, 6));
    }

    #[test]
    fn test_unparseable_dates() {
        assert!(item_dated("").published_at().is_none());
        assert!(item_dated("soon").published_at().is_none());
        assert!(item_dated("2025-13-45").published_at().is_none());
    }
}
