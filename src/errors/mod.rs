use thiserror::Error;

/// Broad classification of a [`GatorError`], independent of its message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Usage,
    NotFound,
    Conflict,
    Transport,
    MalformedData,
    Storage,
    Config,
    Io,
}

#[derive(Error, Debug)]
pub enum GatorError {
    // Usage errors
    #[error("{0}")]
    Usage(String),

    #[error("{command} requires {expected}")]
    MissingArgument {
        command: String,
        expected: &'static str,
    },

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    // Lookup errors
    #[error("User '{0}' does not exist")]
    UserNotFound(String),

    #[error("No user is logged in (run `gator login <name>` first)")]
    NoCurrentUser,

    #[error("Could not find feed with url {0}")]
    FeedNotFound(String),

    #[error("User '{0}' already exists")]
    UserAlreadyExists(String),

    // Network errors
    #[error("Invalid feed URL: {0}")]
    InvalidUrl(String),

    #[error("Failed to fetch feed: {0}")]
    FetchTransport(#[source] reqwest::Error),

    #[error("Failed to fetch feed: request timed out")]
    FetchTimeout,

    #[error("Failed to fetch feed: request cancelled")]
    FetchCancelled,

    // Parsing errors
    #[error("Malformed feed: {0}")]
    MalformedFeed(String),

    // Storage errors
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid config file: {0}")]
    Json(#[from] serde_json::Error),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GatorError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GatorError::Usage(_)
            | GatorError::MissingArgument { .. }
            | GatorError::UnknownCommand(_) => ErrorKind::Usage,
            GatorError::UserNotFound(_)
            | GatorError::NoCurrentUser
            | GatorError::FeedNotFound(_) => ErrorKind::NotFound,
            GatorError::UserAlreadyExists(_) => ErrorKind::Conflict,
            GatorError::InvalidUrl(_)
            | GatorError::FetchTransport(_)
            | GatorError::FetchTimeout
            | GatorError::FetchCancelled => ErrorKind::Transport,
            GatorError::MalformedFeed(_) => ErrorKind::MalformedData,
            GatorError::Database(_) => ErrorKind::Storage,
            GatorError::Config(_) | GatorError::Json(_) => ErrorKind::Config,
            GatorError::Io(_) => ErrorKind::Io,
        }
    }
}

pub type GatorResult<T> = Result<T, GatorError>;
