use crate::errors::{GatorError, GatorResult};
use crate::rss::model::RssFeed;

/// Decode an RSS 2.0 document into a channel and its items.
///
/// Only the `channel` element is required; the root element name is not
/// checked. Either the whole document decodes or `MalformedFeed` is
/// returned. Titles and descriptions are HTML-unescaped afterwards.
pub fn parse_feed(bytes: &[u8]) -> GatorResult<RssFeed> {
    let mut feed: RssFeed =
        quick_xml::de::from_reader(bytes).map_err(|e| GatorError::MalformedFeed(e.to_string()))?;

    feed.unescape_in_place();

    tracing::debug!(
        title = %feed.channel.title,
        items = feed.channel.items.len(),
        "parsed feed"
    );

    Ok(feed)
}
