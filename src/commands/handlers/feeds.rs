use std::io::Write;

use crate::commands::State;
use crate::domain::{Command, NewFeed, NewFeedFollow};
use crate::errors::{GatorError, GatorResult};

pub fn handle_add_feed(state: &mut State, command: &Command) -> GatorResult<()> {
    let args = command.require_args(2, "name and url arguments")?;
    let (name, url) = (&args[0], &args[1]);

    let user = state.current_user()?;

    let feed = state.feeds.create_feed(&NewFeed::new(name, url, user.id))?;
    tracing::info!(feed = %feed.name, url = %feed.url, user = %user.name, "created feed");

    writeln!(state.out, "Feed created:")?;
    writeln!(state.out, "  ID: {}", feed.id)?;
    writeln!(state.out, "  Name: {}", feed.name)?;
    writeln!(state.out, "  URL: {}", feed.url)?;
    writeln!(state.out, "  User ID: {}", feed.user_id)?;

    let follow = state
        .follows
        .create_feed_follow(&NewFeedFollow::new(user.id, feed.id))?;

    writeln!(
        state.out,
        "You are now following feed '{}' as user '{}'",
        follow.feed_name, follow.user_name
    )?;
    Ok(())
}

pub fn handle_feeds(state: &mut State, _command: &Command) -> GatorResult<()> {
    let feeds = state.feeds.get_feeds_with_user()?;

    if feeds.is_empty() {
        writeln!(state.out, "No feeds added yet.")?;
        return Ok(());
    }

    for feed in &feeds {
        writeln!(state.out, "- {}", feed.name)?;
        writeln!(state.out, "  url: {}", feed.url)?;
        writeln!(state.out, "  created by: {}", feed.user_name)?;
    }

    Ok(())
}

pub fn handle_follow(state: &mut State, command: &Command) -> GatorResult<()> {
    let url = &command.require_args(1, "a feed url argument")?[0];

    let feed = state
        .feeds
        .get_feed_by_url(url)?
        .ok_or_else(|| GatorError::FeedNotFound(url.clone()))?;
    let user = state.current_user()?;

    let follow = state
        .follows
        .create_feed_follow(&NewFeedFollow::new(user.id, feed.id))?;
    tracing::info!(feed = %follow.feed_name, user = %follow.user_name, "followed feed");

    writeln!(
        state.out,
        "Followed feed '{}' as user '{}'",
        follow.feed_name, follow.user_name
    )?;
    Ok(())
}

pub fn handle_following(state: &mut State, _command: &Command) -> GatorResult<()> {
    let user = state.current_user()?;
    let follows = state.follows.get_feed_follows_for_user(user.id)?;

    if follows.is_empty() {
        writeln!(state.out, "You are not following any feeds.")?;
        return Ok(());
    }

    writeln!(state.out, "Feeds you are following:")?;
    for follow in &follows {
        writeln!(state.out, "* {}", follow.feed_name)?;
    }

    Ok(())
}
