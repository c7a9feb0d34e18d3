use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// An active bookmark in the `bookmarks` collection.
///
/// Identity is the `(name, url)` pair; there is no synthetic id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub important: bool,
    #[serde(default)]
    pub tag: String,
    /// RFC 3339 creation time. Older stored values may lack it.
    #[serde(default)]
    pub added_at: String,
}

impl Bookmark {
    /// Creates a bookmark stamped with the given creation time.
    pub fn new(name: &str, url: &str, added_at: DateTime<Utc>) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
            important: false,
            tag: String::new(),
            added_at: format_timestamp(added_at),
        }
    }

    pub fn matches(&self, name: &str, url: &str) -> bool {
        self.name == name && self.url == url
    }

    /// Milliseconds since the epoch for `added_at`; zero when missing or unparseable.
    pub fn added_at_millis(&self) -> i64 {
        parse_timestamp_millis(&self.added_at)
    }
}

/// A bookmark that has been moved to the `archive` collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchivedBookmark {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub tag: String,
    #[serde(default)]
    pub archived_at: String,
}

impl ArchivedBookmark {
    /// Builds the archive entry for `bookmark`, carrying its tag over.
    pub fn from_bookmark(bookmark: &Bookmark, archived_at: DateTime<Utc>) -> Self {
        Self {
            name: bookmark.name.clone(),
            url: bookmark.url.clone(),
            tag: bookmark.tag.clone(),
            archived_at: format_timestamp(archived_at),
        }
    }

    /// Turns the entry back into an active bookmark. Importance is not remembered.
    pub fn restore(&self, added_at: DateTime<Utc>) -> Bookmark {
        Bookmark {
            name: self.name.clone(),
            url: self.url.clone(),
            important: false,
            tag: self.tag.clone(),
            added_at: format_timestamp(added_at),
        }
    }

    pub fn matches(&self, name: &str, url: &str) -> bool {
        self.name == name && self.url == url
    }
}

/// Ordering applied to the bookmark list before it is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    /// Starred bookmarks first, otherwise stored order.
    #[default]
    Important,
    AlphabeticalAsc,
    AlphabeticalDesc,
    DateNewest,
    DateOldest,
}

impl SortMode {
    pub const ALL: [SortMode; 5] = [
        SortMode::Important,
        SortMode::AlphabeticalAsc,
        SortMode::AlphabeticalDesc,
        SortMode::DateNewest,
        SortMode::DateOldest,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Important => "important",
            SortMode::AlphabeticalAsc => "alphabetical-asc",
            SortMode::AlphabeticalDesc => "alphabetical-desc",
            SortMode::DateNewest => "date-newest",
            SortMode::DateOldest => "date-oldest",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortMode::ALL
            .iter()
            .find(|mode| mode.as_str() == s.trim())
            .copied()
            .ok_or_else(|| format!("unknown sort mode: {}", s))
    }
}

/// Formats a timestamp the way it is persisted (RFC 3339, millisecond precision, `Z`).
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parses a persisted timestamp into epoch milliseconds, falling back to zero.
///
/// Besides RFC 3339, a bare ISO-8601 date or a date-time without an offset is
/// accepted and read as UTC.
pub fn parse_timestamp_millis(value: &str) -> i64 {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return dt.timestamp_millis();
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return naive.and_utc().timestamp_millis();
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc().timestamp_millis())
        .unwrap_or(0)
}
