pub mod fetcher;
pub mod model;
pub mod parser;
pub mod unescape;

pub use fetcher::{CancelHandle, FetchContext, Fetcher, HttpFetcher, GATOR_USER_AGENT};
pub use model::{RssChannel, RssFeed, RssItem};
pub use parser::parse_feed;
pub use unescape::unescape_html;

use crate::errors::GatorResult;

/// Fetch `url` and parse the body as an RSS feed
pub fn fetch_feed(fetcher: &dyn Fetcher, ctx: &FetchContext, url: &str) -> GatorResult<RssFeed> {
    let body = fetcher.fetch(ctx, url)?;
    parse_feed(&body)
}
