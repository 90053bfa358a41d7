use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;
use url::Url;

use crate::errors::{GatorError, GatorResult};

/// Value sent in the `User-Agent` header of every feed request
pub const GATOR_USER_AGENT: &str = "gator";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Bounds a single fetch: an optional deadline plus a cancellation flag
/// that can be tripped from elsewhere through a [`CancelHandle`].
#[derive(Debug, Clone, Default)]
pub struct FetchContext {
    deadline: Option<Instant>,
    cancelled: Arc<AtomicBool>,
}

/// Cancels the [`FetchContext`] it was taken from
#[derive(Debug, Clone)]
pub struct CancelHandle(Arc<AtomicBool>);

impl CancelHandle {
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }
}

impl FetchContext {
    /// No deadline, not cancelled
    pub fn background() -> Self {
        Self::default()
    }

    /// Deadline `timeout` from now; unbounded if that is past what `Instant` can hold
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            deadline: Instant::now().checked_add(timeout),
            cancelled: Arc::default(),
        }
    }

    pub fn cancel_handle(&self) -> CancelHandle {
        CancelHandle(Arc::clone(&self.cancelled))
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Time left before the deadline; `None` when unbounded
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
    }

    fn check(&self) -> GatorResult<()> {
        if self.is_cancelled() {
            return Err(GatorError::FetchCancelled);
        }
        if self.remaining() == Some(Duration::ZERO) {
            return Err(GatorError::FetchTimeout);
        }
        Ok(())
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait Fetcher {
    /// GET `url` and return the whole response body
    fn fetch(&self, ctx: &FetchContext, url: &str) -> GatorResult<Vec<u8>>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Client-wide ceiling; a [`FetchContext`] deadline can only shorten it
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_else(|_| Client::new()),
        }
    }

    fn parse_url(url: &str) -> GatorResult<Url> {
        let parsed = Url::parse(url).map_err(|e| GatorError::InvalidUrl(format!("{}: {}", url, e)))?;

        match parsed.scheme() {
            "http" | "https" => Ok(parsed),
            scheme => Err(GatorError::InvalidUrl(format!(
                "{}: unsupported scheme '{}'",
                url, scheme
            ))),
        }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

fn fetch_error(err: reqwest::Error) -> GatorError {
    if err.is_timeout() {
        GatorError::FetchTimeout
    } else {
        GatorError::FetchTransport(err)
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, ctx: &FetchContext, url: &str) -> GatorResult<Vec<u8>> {
        ctx.check()?;
        let parsed = Self::parse_url(url)?;

        let mut request = self.client.get(parsed).header(USER_AGENT, GATOR_USER_AGENT);
        if let Some(remaining) = ctx.remaining() {
            request = request.timeout(remaining);
        }

        tracing::debug!(url, "fetching feed");

        let response = request
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(fetch_error)?;
        let status = response.status();
        let body = response.bytes().map_err(fetch_error)?;

        // The request itself cannot be interrupted; drop the body if the
        // caller gave up while it was in flight
        if ctx.is_cancelled() {
            return Err(GatorError::FetchCancelled);
        }

        tracing::debug!(url, status = status.as_u16(), bytes = body.len(), "fetched feed");

        Ok(body.to_vec())
    }
}
