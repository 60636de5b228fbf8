use chrono::{DateTime, Utc};
use feed_rs::model::Entry;
use feed_rs::parser;
use tracing::warn;

/// The fields of a syndication entry the normalizer needs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedEntry {
    pub title: String,
    pub link: Option<String>,
    /// Summary markup, or the content body when the entry has no summary
    pub summary: Option<String>,
    pub published: Option<DateTime<Utc>>,
}

impl From<Entry> for FeedEntry {
    fn from(entry: Entry) -> Self {
        let summary = entry
            .summary
            .map(|text| text.content)
            .or_else(|| entry.content.and_then(|content| content.body));

        FeedEntry {
            title: entry.title.map(|text| text.content).unwrap_or_default(),
            link: entry.links.into_iter().next().map(|link| link.href),
            summary,
            published: entry.published.or(entry.updated),
        }
    }
}

/// Parse RSS/Atom bytes into entries in document order. A document that
/// cannot be parsed yields no entries.
pub fn parse_feed(raw: &[u8]) -> Vec<FeedEntry> {
    match parser::parse(raw) {
        Ok(feed) => feed.entries.into_iter().map(FeedEntry::from).collect(),
        Err(e) => {
            warn!(error = %e, bytes = raw.len(), "unparseable feed, treating as empty");
            Vec::new()
        }
    }
}
