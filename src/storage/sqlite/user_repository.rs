use rusqlite::Row;

use crate::domain::{NewUser, User};
use crate::errors::{GatorError, GatorResult};
use crate::storage::sqlite::SqliteStorage;
use crate::storage::traits::UserRepository;

pub struct SqliteUserRepository {
    storage: SqliteStorage,
}

impl SqliteUserRepository {
    pub fn new(storage: SqliteStorage) -> Self {
        Self { storage }
    }
}

fn user_from_row(row: &Row<'_>) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get(0)?,
        created_at: row.get(1)?,
        updated_at: row.get(2)?,
        name: row.get(3)?,
    })
}

impl UserRepository for SqliteUserRepository {
    fn get_user(&self, name: &str) -> GatorResult<Option<User>> {
        let conn = self.storage.connection()?;
        let mut stmt =
            conn.prepare("SELECT id, created_at, updated_at, name FROM users WHERE name = ?1")?;

        match stmt.query_row([name], user_from_row) {
            Ok(user) => Ok(Some(user)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(GatorError::from(e)),
        }
    }

    fn create_user(&self, user: &NewUser) -> GatorResult<User> {
        let conn = self.storage.connection()?;
        let created = conn.query_row(
            "INSERT INTO users (id, created_at, updated_at, name) VALUES (?1, ?2, ?3, ?4)
             RETURNING id, created_at, updated_at, name",
            (&user.id, &user.created_at, &user.updated_at, &user.name),
            user_from_row,
        )?;

        Ok(created)
    }

    fn delete_users(&self) -> GatorResult<()> {
        let conn = self.storage.connection()?;
        let deleted = conn.execute("DELETE FROM users", [])?;
        tracing::debug!(deleted, "deleted users");
        Ok(())
    }

    fn get_users(&self) -> GatorResult<Vec<User>> {
        let conn = self.storage.connection()?;
        let mut stmt = conn.prepare(
            "SELECT id, created_at, updated_at, name FROM users ORDER BY created_at, rowid",
        )?;

        let users = stmt.query_map([], user_from_row)?;
        users.collect::<Result<Vec<_>, _>>().map_err(GatorError::from)
    }
}
