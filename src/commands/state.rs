use std::io::{self, Write};

use crate::config::Config;
use crate::domain::User;
use crate::errors::{GatorError, GatorResult};
use crate::rss::{Fetcher, HttpFetcher};
use crate::storage::sqlite::{
    SqliteFeedFollowRepository, SqliteFeedRepository, SqliteStorage, SqliteUserRepository,
};
use crate::storage::traits::{FeedFollowRepository, FeedRepository, UserRepository};

/// Everything a handler may touch. Built once in `main` and handed to a
/// single dispatch.
pub struct State {
    pub users: Box<dyn UserRepository>,
    pub feeds: Box<dyn FeedRepository>,
    pub follows: Box<dyn FeedFollowRepository>,
    pub fetcher: Box<dyn Fetcher>,
    pub config: Config,
    /// Where handlers write their report (stdout outside of tests)
    pub out: Box<dyn Write>,
}

impl State {
    pub fn with_sqlite(storage: SqliteStorage, config: Config) -> Self {
        let fetcher = HttpFetcher::with_timeout(config.fetch_timeout());

        Self {
            users: Box::new(SqliteUserRepository::new(storage.clone())),
            feeds: Box::new(SqliteFeedRepository::new(storage.clone())),
            follows: Box::new(SqliteFeedFollowRepository::new(storage)),
            fetcher: Box::new(fetcher),
            config,
            out: Box::new(io::stdout()),
        }
    }

    /// Look up the logged-in user named in the config
    pub fn current_user(&self) -> GatorResult<User> {
        let name = self.config.current_user().ok_or(GatorError::NoCurrentUser)?;

        self.users
            .get_user(name)?
            .ok_or_else(|| GatorError::UserNotFound(name.to_string()))
    }
}
