use uuid::Uuid;

use crate::domain::{CreatedFeedFollow, FollowedFeed, NewFeedFollow};
use crate::errors::{GatorError, GatorResult};
use crate::storage::sqlite::SqliteStorage;
use crate::storage::traits::FeedFollowRepository;

pub struct SqliteFeedFollowRepository {
    storage: SqliteStorage,
}

impl SqliteFeedFollowRepository {
    pub fn new(storage: SqliteStorage) -> Self {
        Self { storage }
    }
}

impl FeedFollowRepository for SqliteFeedFollowRepository {
    fn create_feed_follow(&self, follow: &NewFeedFollow) -> GatorResult<CreatedFeedFollow> {
        let conn = self.storage.connection()?;

        conn.execute(
            "INSERT INTO feed_follows (id, created_at, updated_at, user_id, feed_id)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            (
                &follow.id,
                &follow.created_at,
                &follow.updated_at,
                &follow.user_id,
                &follow.feed_id,
            ),
        )?;

        // Same connection guard, so the row we just wrote is visible
        let created = conn.query_row(
            "SELECT feed_follows.id, feed_follows.created_at, feed_follows.updated_at,
                    feed_follows.user_id, feed_follows.feed_id, feeds.name, users.name
             FROM feed_follows
             JOIN feeds ON feeds.id = feed_follows.feed_id
             JOIN users ON users.id = feed_follows.user_id
             WHERE feed_follows.id = ?1",
            [&follow.id],
            |row| {
                Ok(CreatedFeedFollow {
                    id: row.get(0)?,
                    created_at: row.get(1)?,
                    updated_at: row.get(2)?,
                    user_id: row.get(3)?,
                    feed_id: row.get(4)?,
                    feed_name: row.get(5)?,
                    user_name: row.get(6)?,
                })
            },
        )?;

        Ok(created)
    }

    fn get_feed_follows_for_user(&self, user_id: Uuid) -> GatorResult<Vec<FollowedFeed>> {
        let conn = self.storage.connection()?;
        let mut stmt = conn.prepare(
            "SELECT feeds.name
             FROM feed_follows
             JOIN feeds ON feeds.id = feed_follows.feed_id
             WHERE feed_follows.user_id = ?1
             ORDER BY feed_follows.created_at, feed_follows.rowid",
        )?;

        let follows = stmt.query_map([user_id], |row| {
            Ok(FollowedFeed {
                feed_name: row.get(0)?,
            })
        })?;

        follows.collect::<Result<Vec<_>, _>>().map_err(GatorError::from)
    }
}
