//! Error types for the ProductLayer client library.
//!
//! Note the distinction between [`Error`], which is raised by fallible
//! operations in this crate (URL resolution, proxy setup, JSON parsing), and
//! [`ErrorMessage`](crate::ErrorMessage), which is the serializable payload
//! the API server returns in HTTP error bodies. The latter represents an
//! error, it does not raise one.

/// The error type for operations in this crate.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The configured schema/host/port/version did not form a valid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Invalid client configuration, such as unusable proxy settings.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A payload could not be parsed as JSON.
    ///
    /// Returned when a response body does not match the expected shape, for
    /// example an error body that is not a valid
    /// [`ErrorMessage`](crate::ErrorMessage).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized `Result` type for ProductLayer client operations.
pub type Result<T> = std::result::Result<T, Error>;
