//! Error types
//!
//! None of these escape the extraction engine: extraction errors are mapped to
//! "signal not found" and fetch errors to a degraded record.

use thiserror::Error;

/// Failure inside a single extraction tier
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("script block is empty")]
    EmptyScript,

    #[error("malformed embedded JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),

    #[error("invalid UTF-8 in {0}")]
    InvalidUtf8(&'static str),

    #[error("{0} is null")]
    NullArgument(&'static str),
}

/// Failure to obtain the page markup
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("unsupported URL scheme '{0}'")]
    UnsupportedScheme(String),

    #[error("HTTP status {0}")]
    Status(u16),

    #[error("request timed out")]
    Timeout,

    #[error("transport error: {0}")]
    Transport(String),

    #[error("failed to read response body: {0}")]
    Body(String),
}

impl FetchError {
    /// Transport-level failures may succeed on a second attempt; status codes
    /// and bad input will not.
    pub fn is_retryable(&self) -> bool {
        matches!(self, FetchError::Timeout | FetchError::Transport(_))
    }
}

impl From<ureq::Error> for FetchError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::StatusCode(code) => FetchError::Status(code),
            ureq::Error::Timeout(_) => FetchError::Timeout,
            other => FetchError::Transport(other.to_string()),
        }
    }
}

/// Failure while setting up process-wide facilities
#[derive(Error, Debug)]
pub enum InitializationError {
    #[error("Logger initialization error: {0}")]
    Logger(#[from] log::SetLoggerError),
}
