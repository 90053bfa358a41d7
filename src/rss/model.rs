use serde::Deserialize;

use super::unescape::unescape_html;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RssFeed {
    pub channel: RssChannel,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RssChannel {
    pub title: String,
    pub description: String,
    #[serde(rename = "item")]
    pub items: Vec<RssItem>,
}

/// One `<item>`. Feeds use either `pubDate` or `published` for the date;
/// both are kept verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RssItem {
    pub title: String,
    pub description: String,
    pub link: String,
    pub guid: String,
    pub published: String,
    #[serde(rename = "pubDate")]
    pub pub_date: String,
}

impl RssItem {
    /// Whichever publish date the feed populated, preferring `pubDate`
    pub fn date(&self) -> Option<&str> {
        [self.pub_date.as_str(), self.published.as_str()]
            .into_iter()
            .find(|d| !d.is_empty())
    }
}

impl RssFeed {
    /// Decode HTML entities left in titles and descriptions after XML decoding
    pub fn unescape_in_place(&mut self) {
        let channel = &mut self.channel;
        unescape_field(&mut channel.title);
        unescape_field(&mut channel.description);

        for item in &mut channel.items {
            unescape_field(&mut item.title);
            unescape_field(&mut item.description);
        }
    }
}

fn unescape_field(field: &mut String) {
    if let std::borrow::Cow::Owned(decoded) = unescape_html(field) {
        *field = decoded;
    }
}
