use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use tempfile::TempDir;

use crate::commands::State;
use crate::config::Config;
use crate::rss::fetcher::MockFetcher;
use crate::storage::sqlite::{
    SqliteFeedFollowRepository, SqliteFeedRepository, SqliteStorage, SqliteUserRepository,
};
use crate::storage::traits::{
    FeedFollowRepository, FeedRepository, MockFeedFollowRepository, MockFeedRepository,
    MockUserRepository, UserRepository,
};

/// Captures handler output so tests can read it back
#[derive(Clone, Default)]
pub(crate) struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl SharedBuffer {
    pub(crate) fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }

    pub(crate) fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

pub(crate) struct Harness {
    pub state: State,
    pub out: SharedBuffer,
    _dir: TempDir,
}

impl Harness {
    /// Mocks without expectations: any storage or network call panics
    pub(crate) fn with_mocks() -> Self {
        Self::build(
            Box::new(MockUserRepository::new()),
            Box::new(MockFeedRepository::new()),
            Box::new(MockFeedFollowRepository::new()),
        )
    }

    pub(crate) fn with_sqlite() -> Self {
        let storage = SqliteStorage::in_memory().unwrap();
        Self::build(
            Box::new(SqliteUserRepository::new(storage.clone())),
            Box::new(SqliteFeedRepository::new(storage.clone())),
            Box::new(SqliteFeedFollowRepository::new(storage)),
        )
    }

    fn build(
        users: Box<dyn UserRepository>,
        feeds: Box<dyn FeedRepository>,
        follows: Box<dyn FeedFollowRepository>,
    ) -> Self {
        let dir = TempDir::new().unwrap();
        let config = Config::new("gator.db", dir.path().join("gatorconfig.json"));
        config.write().unwrap();

        let out = SharedBuffer::default();
        let state = State {
            users,
            feeds,
            follows,
            fetcher: Box::new(MockFetcher::new()),
            config,
            out: Box::new(out.clone()),
        };

        Self {
            state,
            out,
            _dir: dir,
        }
    }

    pub(crate) fn login_as(&mut self, name: &str) {
        self.state.config.set_user(name).unwrap();
    }

    pub(crate) fn output(&self) -> String {
        self.out.contents()
    }

    pub(crate) fn config_on_disk(&self) -> Config {
        Config::read_from(self.state.config.path()).unwrap()
    }
}
