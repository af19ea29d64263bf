//! Error types for tabview.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error for startup and the terminal loop
//!   - [`ConfigError`](crate::config::ConfigError) - config file read/parse failures
//!   - [`LoggingError`](crate::logging::LoggingError) - log file setup failures
//!   - [`TuiError`](crate::view::TuiError) - terminal I/O, or a fetcher
//!     that could not be built (bad base URL)
//!
//! # Recovery Strategy
//!
//! Fetch failures during normal operation are **non-fatal**. They are stored
//! as a display string in the table state, the previously fetched page stays
//! on screen, and any later page-affecting action (or an explicit refresh)
//! retries. An empty result is not an error at all, and responses to
//! superseded requests are dropped without being surfaced.

use thiserror::Error;

/// Top-level application error.
///
/// Everything here is fatal: it aborts startup or ends the event loop.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Log file could not be set up.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Terminal setup, rendering, or fetcher construction failed.
    #[error("TUI error: {0}")]
    Tui(#[from] crate::view::TuiError),
}

/// Failure to fetch one page from the remote provider.
///
/// The `Display` form is what the user sees in the table's error line, so
/// every variant carries enough context to be read on its own.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Connection, TLS, timeout or other transport failure.
    #[error("Network error: {0}")]
    Transport(String),

    /// The provider answered with a non-success status.
    #[error("HTTP {status} from {url}")]
    Status {
        /// Numeric HTTP status code.
        status: u16,
        /// Request URL, for the error line.
        url: String,
    },

    /// The body was not the expected JSON.
    #[error("Invalid response body: {0}")]
    Decode(String),

    /// The body parsed but lacks the page array for the resource.
    #[error("Response has no '{collection}' array")]
    MissingCollection {
        /// Expected JSON key (`users` or `products`).
        collection: &'static str,
    },

    /// The configured base URL cannot carry a path.
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// The background fetch worker has stopped accepting requests.
    #[error("Fetch worker is not running")]
    WorkerUnavailable,
}
