pub mod command;
pub mod feed;
pub mod feed_follow;
pub mod user;

pub use command::Command;
pub use feed::{Feed, FeedWithUser, NewFeed};
pub use feed_follow::{CreatedFeedFollow, FollowedFeed, NewFeedFollow};
pub use user::{NewUser, User};
