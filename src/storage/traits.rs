use uuid::Uuid;

use crate::domain::{
    CreatedFeedFollow, Feed, FeedWithUser, FollowedFeed, NewFeed, NewFeedFollow, NewUser, User,
};
use crate::errors::GatorResult;

#[cfg_attr(test, mockall::automock)]
pub trait UserRepository: Send + Sync {
    fn get_user(&self, name: &str) -> GatorResult<Option<User>>;
    fn create_user(&self, user: &NewUser) -> GatorResult<User>;
    /// Delete every user; feeds and follows go with them
    fn delete_users(&self) -> GatorResult<()>;
    fn get_users(&self) -> GatorResult<Vec<User>>;
}

#[cfg_attr(test, mockall::automock)]
pub trait FeedRepository: Send + Sync {
    fn create_feed(&self, feed: &NewFeed) -> GatorResult<Feed>;
    fn get_feed_by_url(&self, url: &str) -> GatorResult<Option<Feed>>;
    fn get_feeds_with_user(&self) -> GatorResult<Vec<FeedWithUser>>;
}

#[cfg_attr(test, mockall::automock)]
pub trait FeedFollowRepository: Send + Sync {
    fn create_feed_follow(&self, follow: &NewFeedFollow) -> GatorResult<CreatedFeedFollow>;
    fn get_feed_follows_for_user(&self, user_id: Uuid) -> GatorResult<Vec<FollowedFeed>>;
}
