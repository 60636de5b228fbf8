//! Entry to article normalization. Every helper here is total: a defect in
//! one field leaves that field empty instead of failing the entry.

use chrono::{DateTime, Timelike, Utc};
use scraper::{Html, Selector};
use tracing::debug;
use url::Url;
use uuid::Uuid;

use super::catalog::PROVIDER_NAME;
use super::parse::FeedEntry;
use crate::models::NewsArticle;

pub const MAX_DESCRIPTION_CHARS: usize = 500;

const SOURCE_SEPARATOR: &str = " - ";

/// Split `"Headline - Source"` on the last separator. Titles without one are
/// attributed to the feed provider.
pub fn split_title_source(raw: &str) -> (String, String) {
    match raw.rsplit_once(SOURCE_SEPARATOR) {
        Some((title, source)) => (title.to_string(), source.to_string()),
        None => (raw.to_string(), PROVIDER_NAME.to_string()),
    }
}

/// Publication time at whole-second precision.
pub fn coerce_published(published: Option<DateTime<Utc>>) -> Option<DateTime<Utc>> {
    published.and_then(|ts| ts.with_nanosecond(0))
}

/// `src` of the first `<img>` in an HTML fragment.
pub fn extract_image(markup: &str) -> Option<String> {
    let selector = Selector::parse("img").ok()?;
    let fragment = Html::parse_fragment(markup);
    let src = fragment
        .select(&selector)
        .next()?
        .value()
        .attr("src")?
        .trim();
    (!src.is_empty()).then(|| src.to_string())
}

/// Hard cut at `MAX_DESCRIPTION_CHARS` characters, no ellipsis.
pub fn truncate_description(text: &str) -> String {
    text.chars().take(MAX_DESCRIPTION_CHARS).collect()
}

/// Absolute URL check; relative or malformed links are rejected. Accepted
/// links are returned as written, only trimmed.
pub fn valid_link(link: &str) -> Option<String> {
    let link = link.trim();
    Url::parse(link).ok().map(|_| link.to_string())
}

/// Build the article for one entry, tagged with the requested category.
/// Returns `None` only when the entry has no usable link.
pub fn normalize_entry(entry: FeedEntry, category: &str) -> Option<NewsArticle> {
    let Some(url) = entry.link.as_deref().and_then(valid_link) else {
        debug!(title = %entry.title, "skipping entry without a valid link");
        return None;
    };

    let (title, source) = split_title_source(&entry.title);
    let summary = entry.summary.unwrap_or_default();

    Some(NewsArticle {
        id: Uuid::new_v4(),
        title,
        description: truncate_description(&summary),
        url,
        published: coerce_published(entry.published),
        source,
        image_url: extract_image(&summary),
        category: category.to_string(),
    })
}
