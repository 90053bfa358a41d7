//! One handler per CLI verb, all sharing the registry's handler signature.

pub mod aggregate;
pub mod feeds;
pub mod users;

pub use aggregate::{handle_agg, DEFAULT_FEED_URL};
pub use feeds::{handle_add_feed, handle_feeds, handle_follow, handle_following};
pub use users::{handle_login, handle_register, handle_reset, handle_users};
