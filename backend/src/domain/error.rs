//! Transport-agnostic failure payload returned by storefront services.
//!
//! Services pick an [`ErrorCode`] and a message suitable for visitors;
//! adapters decide how each code is rendered (the HTTP adapter maps codes to
//! status lines).

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::TraceId;

/// Response header carrying the request trace identifier.
pub const TRACE_ID_HEADER: &str = "trace-id";

/// Message exposed in place of an internal error's own text.
pub const REDACTED_MESSAGE: &str = "Internal server error";

/// Failure category, serialised in `snake_case`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// Input failed validation, e.g. a malformed slug or page size.
    InvalidRequest,
    /// Cults3D has no creation for the requested slug.
    NotFound,
    /// Cults3D could not be reached or answered with an error.
    ServiceUnavailable,
    /// A fault inside this service; the message is never shown to clients.
    InternalError,
}

/// Error payload carried from services to adapters.
///
/// The trace identifier in scope when the value is built is recorded so the
/// response can be matched to request logs.
///
/// # Examples
/// ```
/// use storefront::domain::{Error, ErrorCode};
///
/// let err = Error::not_found("Not found.");
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// assert_eq!(err.to_string(), "Not found.");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("{message}")]
#[serde(rename_all = "camelCase")]
pub struct Error {
    code: ErrorCode,
    message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    trace_id: Option<String>,
}

impl Error {
    /// Build an error, tagging it with [`TraceId::current`].
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
            trace_id: TraceId::current().as_ref().map(ToString::to_string),
        }
    }

    /// Rejected input.
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Unknown resource.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Upstream failure.
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ServiceUnavailable, message)
    }

    /// Fault inside this service.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    #[must_use]
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }

    #[must_use]
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    /// Attach structured context such as the offending field.
    ///
    /// ```
    /// use serde_json::json;
    /// use storefront::domain::Error;
    ///
    /// let err = Error::invalid_request("limit must be a non-negative integer")
    ///     .with_details(json!({ "field": "limit" }));
    /// assert_eq!(err.details(), Some(&json!({ "field": "limit" })));
    /// ```
    #[must_use]
    pub fn with_details(self, details: Value) -> Self {
        Self {
            details: Some(details),
            ..self
        }
    }

    /// Override the recorded trace identifier.
    #[must_use]
    pub fn with_trace_id(self, id: impl Into<String>) -> Self {
        Self {
            trace_id: Some(id.into()),
            ..self
        }
    }

    /// Copy safe to show a client.
    ///
    /// Internal errors lose their message and details but keep the trace
    /// identifier; every other code is returned unchanged.
    #[must_use]
    pub fn public(&self) -> Self {
        match self.code {
            ErrorCode::InternalError => Self {
                code: ErrorCode::InternalError,
                message: REDACTED_MESSAGE.to_owned(),
                details: None,
                trace_id: self.trace_id.clone(),
            },
            _ => self.clone(),
        }
    }
}
