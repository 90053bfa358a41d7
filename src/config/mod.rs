use std::fs;
use std::io::ErrorKind as IoErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::errors::{GatorError, GatorResult};

const CONFIG_FILE_NAME: &str = ".gatorconfig.json";

/// Overrides the config file location (useful for tests and multiple profiles)
pub const CONFIG_PATH_ENV: &str = "GATOR_CONFIG";

const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;
const MAX_FETCH_TIMEOUT_SECS: u64 = 60 * 60;

/// Contents of `~/.gatorconfig.json`.
///
/// `db_url` points at the SQLite database, `current_user_name` is the
/// logged-in user. The file location is remembered so `set_user` can
/// persist in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub db_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_user_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fetch_timeout_secs: Option<u64>,
    #[serde(skip)]
    path: PathBuf,
}

impl Config {
    pub fn new(db_url: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            db_url: db_url.into(),
            current_user_name: None,
            fetch_timeout_secs: None,
            path: path.into(),
        }
    }

    /// Resolve the config file path: `$GATOR_CONFIG` or `~/.gatorconfig.json`
    pub fn default_path() -> GatorResult<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            if !path.is_empty() {
                return Ok(PathBuf::from(path));
            }
        }

        let home = dirs::home_dir()
            .ok_or_else(|| GatorError::Config("Could not determine home directory".to_string()))?;

        Ok(home.join(CONFIG_FILE_NAME))
    }

    pub fn read() -> GatorResult<Self> {
        // A .env in the working directory may set GATOR_CONFIG
        dotenvy::dotenv().ok();

        let path = Self::default_path()?;
        Self::read_from(path)
    }

    pub fn read_from<P: AsRef<Path>>(path: P) -> GatorResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            IoErrorKind::NotFound => GatorError::Config(format!(
                "config file not found at {} (create it with {{\"db_url\": \"gator.db\"}})",
                path.display()
            )),
            _ => GatorError::Io(e),
        })?;

        let mut config: Config = serde_json::from_str(&content)?;
        config.path = path.to_path_buf();

        tracing::debug!(path = %path.display(), "loaded config");

        Ok(config)
    }

    pub fn write(&self) -> GatorResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(&self.path, json + "\n")?;
        Ok(())
    }

    /// Set the current user and persist immediately
    pub fn set_user(&mut self, name: &str) -> GatorResult<()> {
        self.current_user_name = Some(name.to_string());
        self.write()
    }

    pub fn current_user(&self) -> Option<&str> {
        self.current_user_name.as_deref()
    }

    /// `fetch_timeout_secs`, default 30 s, capped at one hour
    pub fn fetch_timeout(&self) -> Duration {
        let secs = self
            .fetch_timeout_secs
            .unwrap_or(DEFAULT_FETCH_TIMEOUT_SECS)
            .min(MAX_FETCH_TIMEOUT_SECS);
        Duration::from_secs(secs)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
