//! The error payload returned by the ProductLayer API.
//!
//! When a request fails, the server responds with an [`ErrorMessage`] body:
//! a human-readable message, an application-level status code, and, in debug
//! deployments only, a rendered stack trace. This module provides the payload
//! type plus constructors for building one at the boundary where a failure is
//! caught.

use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt::Write;

/// A status code that can seed an [`ErrorMessage`].
///
/// The ProductLayer API identifies error conditions with an application-level
/// numeric code and a short human-readable reason phrase. Any status
/// enumeration exposing those two pieces can be used to construct an error
/// message; an implementation is provided for [`http::StatusCode`].
///
/// # Examples
///
/// ```
/// use productlayer::ApiStatus;
///
/// assert_eq!(http::StatusCode::NOT_FOUND.code(), 404);
/// assert_eq!(http::StatusCode::NOT_FOUND.reason_phrase(), "Not Found");
/// ```
pub trait ApiStatus {
    /// The numeric status code.
    fn code(&self) -> i32;

    /// The default human-readable label for this code.
    fn reason_phrase(&self) -> &str;
}

impl ApiStatus for http::StatusCode {
    fn code(&self) -> i32 {
        i32::from(self.as_u16())
    }

    fn reason_phrase(&self) -> &str {
        self.canonical_reason().unwrap_or("")
    }
}

/// A single API error, as serialized into HTTP error response bodies.
///
/// The three fields serialize under their direct names (`message`, `code`,
/// `throwable`); `throwable` is omitted entirely when absent, which is the
/// expected case outside of alpha/beta deployments. Callers should treat a
/// present `throwable` as diagnostic text only, never parse or act on it.
///
/// # Examples
///
/// ```
/// use productlayer::ErrorMessage;
///
/// let err = ErrorMessage::new("product not found", 404);
/// assert_eq!(err.message, "product not found");
/// assert_eq!(err.code, 404);
/// assert!(err.throwable.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorMessage {
    /// Human-readable description of the error.
    pub message: String,

    /// Application-level status code, distinct from the HTTP status code.
    pub code: i32,

    /// Rendered stack/cause text, present only when built from a caught
    /// error in a debug deployment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub throwable: Option<String>,
}

impl ErrorMessage {
    /// Creates an error message from a raw message and code pair.
    pub fn new(message: impl Into<String>, code: i32) -> Self {
        Self {
            message: message.into(),
            code,
            throwable: None,
        }
    }

    /// Creates an error message from a caught error.
    ///
    /// The error's display text becomes `message`, and its type name and
    /// full `source()` chain are rendered into `throwable`. Rendering happens
    /// here, at the capture site, so no live error value crosses the
    /// serialization boundary.
    ///
    /// # Examples
    ///
    /// ```
    /// use productlayer::ErrorMessage;
    ///
    /// let io_err = std::io::Error::new(std::io::ErrorKind::Other, "boom");
    /// let err = ErrorMessage::from_error(&io_err, 500);
    ///
    /// assert_eq!(err.message, "boom");
    /// assert_eq!(err.code, 500);
    /// assert!(err.throwable.unwrap().contains("io::error"));
    /// ```
    pub fn from_error<E>(error: &E, code: i32) -> Self
    where
        E: StdError,
    {
        Self {
            message: error.to_string(),
            code,
            throwable: Some(render_error(error)),
        }
    }

    /// Creates an error message from a status code alone.
    ///
    /// `message` is the status's reason phrase and `code` its numeric value;
    /// `throwable` is left unset.
    ///
    /// # Examples
    ///
    /// ```
    /// use productlayer::ErrorMessage;
    ///
    /// let err = ErrorMessage::from_status(&http::StatusCode::FORBIDDEN);
    /// assert_eq!(err.message, "Forbidden");
    /// assert_eq!(err.code, 403);
    /// ```
    pub fn from_status<S>(status: &S) -> Self
    where
        S: ApiStatus,
    {
        Self {
            message: status.reason_phrase().to_string(),
            code: status.code(),
            throwable: None,
        }
    }

    /// Creates an error message from a status code and a caught error.
    ///
    /// The reason phrase and the error's display text are joined under the
    /// fixed `Detailed Message:` label, and the rendered error goes into
    /// `throwable`.
    pub fn from_status_and_error<S, E>(status: &S, error: &E) -> Self
    where
        S: ApiStatus,
        E: StdError,
    {
        Self {
            message: format!(
                "{} Detailed Message: {}",
                status.reason_phrase(),
                error
            ),
            code: status.code(),
            throwable: Some(render_error(error)),
        }
    }

    /// Parses an error body received from the API.
    ///
    /// This is how the transport layer turns a raw HTTP error body back into
    /// a structured `ErrorMessage` for callers.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`](crate::Error::Json) if the body is not a valid
    /// error message.
    pub fn from_json(raw: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Renders an error's type name, display text, and cause chain into a single
/// transportable string.
fn render_error<E>(error: &E) -> String
where
    E: StdError,
{
    let mut rendered = format!("{}: {}", std::any::type_name::<E>(), error);
    let mut source = error.source();
    while let Some(cause) = source {
        let _ = write!(rendered, "\nCaused by: {}", cause);
        source = cause.source();
    }
    rendered
}
