use rusqlite::Row;

use crate::domain::{Feed, FeedWithUser, NewFeed};
use crate::errors::{GatorError, GatorResult};
use crate::storage::sqlite::SqliteStorage;
use crate::storage::traits::FeedRepository;

pub struct SqliteFeedRepository {
    storage: SqliteStorage,
}

impl SqliteFeedRepository {
    pub fn new(storage: SqliteStorage) -> Self {
        Self { storage }
    }
}

fn feed_from_row(row: &Row<'_>) -> rusqlite::Result<Feed> {
    Ok(Feed {
        id: row.get(0)?,
        created_at: row.get(1)?,
        updated_at: row.get(2)?,
        name: row.get(3)?,
        url: row.get(4)?,
        user_id: row.get(5)?,
    })
}

impl FeedRepository for SqliteFeedRepository {
    fn create_feed(&self, feed: &NewFeed) -> GatorResult<Feed> {
        let conn = self.storage.connection()?;
        let created = conn.query_row(
            "INSERT INTO feeds (id, created_at, updated_at, name, url, user_id)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)
             RETURNING id, created_at, updated_at, name, url, user_id",
            (
                &feed.id,
                &feed.created_at,
                &feed.updated_at,
                &feed.name,
                &feed.url,
                &feed.user_id,
            ),
            feed_from_row,
        )?;

        Ok(created)
    }

    fn get_feed_by_url(&self, url: &str) -> GatorResult<Option<Feed>> {
        let conn = self.storage.connection()?;
        let mut stmt = conn.prepare(
            "SELECT id, created_at, updated_at, name, url, user_id FROM feeds WHERE url = ?1",
        )?;

        match stmt.query_row([url], feed_from_row) {
            Ok(feed) => Ok(Some(feed)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(GatorError::from(e)),
        }
    }

    fn get_feeds_with_user(&self) -> GatorResult<Vec<FeedWithUser>> {
        let conn = self.storage.connection()?;
        let mut stmt = conn.prepare(
            "SELECT feeds.name, feeds.url, users.name
             FROM feeds
             JOIN users ON users.id = feeds.user_id
             ORDER BY feeds.created_at, feeds.rowid",
        )?;

        let feeds = stmt.query_map([], |row| {
            Ok(FeedWithUser {
                name: row.get(0)?,
                url: row.get(1)?,
                user_name: row.get(2)?,
            })
        })?;

        feeds.collect::<Result<Vec<_>, _>>().map_err(GatorError::from)
    }
}
