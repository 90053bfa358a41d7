pub mod sqlite;
pub mod traits;

pub use sqlite::{
    SqliteFeedFollowRepository, SqliteFeedRepository, SqliteStorage, SqliteUserRepository,
};
pub use traits::{FeedFollowRepository, FeedRepository, UserRepository};
