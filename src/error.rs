//! Error types for the scenario harness.
//!
//! The failure taxonomy mirrors the three ways a remote call can go wrong:
//! the request never completed ([`Error::Transport`]), the server answered
//! with an unexpected status ([`Error::Remote`]), or the response was
//! well-formed but its contents violated the expected contract
//! ([`Error::Assertion`]).

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while running API scenarios.
#[derive(Debug, Error)]
pub enum Error {
    /// Network-layer failure: DNS, connection reset, timeout. The call never
    /// reached the remote, or no response was received.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A response was received but carried an unexpected status code
    /// (auth failure, rate limit, not-found, ...).
    #[error("remote error {status}: {message}")]
    Remote {
        /// HTTP status code returned by the server.
        status: u16,
        /// Response body, truncated for logging.
        message: String,
    },

    /// The response was well-formed but a field value violated the
    /// expected contract.
    #[error("assertion failed: {0}")]
    Assertion(String),

    /// A scenario needed the issue number before the creation step set it.
    #[error("issue number not set; the creation scenario has not run or did not succeed")]
    IssueNotCreated,

    /// A required environment variable is absent.
    #[error("missing environment variable: {0}")]
    MissingEnv(String),

    /// Invalid configuration value.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// URL parsing error.
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),
}

impl Error {
    /// Create a remote error from a status code and response body.
    ///
    /// The body is truncated so that large HTML error pages do not flood
    /// the report output.
    pub fn remote(status: u16, body: impl Into<String>) -> Self {
        let mut message = body.into();
        if message.len() > 200 {
            // Back off to a char boundary before cutting.
            let mut end = 200;
            while !message.is_char_boundary(end) {
                end -= 1;
            }
            message.truncate(end);
            message.push_str("...");
        }
        Self::Remote { status, message }
    }

    /// Create an assertion failure with the given message.
    pub fn assertion(msg: impl Into<String>) -> Self {
        Self::Assertion(msg.into())
    }

    /// Create a configuration error with the given message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Whether this error is an assertion failure (as opposed to a
    /// transport or remote failure).
    pub fn is_assertion(&self) -> bool {
        matches!(self, Self::Assertion(_))
    }
}
