mod connection;
mod feed_follow_repository;
mod feed_repository;
mod user_repository;

pub use connection::SqliteStorage;
pub use feed_follow_repository::SqliteFeedFollowRepository;
pub use feed_repository::SqliteFeedRepository;
pub use user_repository::SqliteUserRepository;
