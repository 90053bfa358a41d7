use std::io::Write;

use crate::commands::State;
use crate::domain::Command;
use crate::errors::GatorResult;
use crate::rss::{self, FetchContext, RssFeed};

/// Fetched by `agg` when no url argument is given
pub const DEFAULT_FEED_URL: &str = "https://www.wagslane.dev/index.xml";

pub fn handle_agg(state: &mut State, command: &Command) -> GatorResult<()> {
    let url = command
        .args
        .first()
        .map(String::as_str)
        .unwrap_or(DEFAULT_FEED_URL);

    let ctx = FetchContext::with_timeout(state.config.fetch_timeout());
    let feed = rss::fetch_feed(state.fetcher.as_ref(), &ctx, url)?;

    tracing::info!(url, items = feed.channel.items.len(), "aggregated feed");

    print_feed(&mut state.out, &feed)?;
    Ok(())
}

fn print_feed(out: &mut dyn Write, feed: &RssFeed) -> std::io::Result<()> {
    let channel = &feed.channel;
    writeln!(out, "Channel: {}", channel.title)?;
    if !channel.description.is_empty() {
        writeln!(out, "  {}", channel.description)?;
    }

    for item in &channel.items {
        writeln!(out)?;
        writeln!(out, "* {}", item.title)?;
        if !item.link.is_empty() {
            writeln!(out, "  link: {}", item.link)?;
        }
        if let Some(date) = item.date() {
            writeln!(out, "  published: {}", date)?;
        }
        if !item.description.is_empty() {
            writeln!(out, "  {}", item.description)?;
        }
    }

    Ok(())
}
