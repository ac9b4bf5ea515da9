//! Shared validation helpers for inbound HTTP adapters.

use serde_json::json;

use crate::domain::Error;

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    InvalidInteger,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::InvalidInteger => "invalid_integer",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(self) -> &'static str {
        self.0
    }
}

pub(crate) fn invalid_integer_error(field: FieldName, value: &str) -> Error {
    let field = field.as_str();
    Error::invalid_request(format!("{field} must be a non-negative integer")).with_details(json!({
        "field": field,
        "value": value,
        "code": ErrorCode::InvalidInteger.as_str(),
    }))
}

/// Parse an optional query parameter as `u32`, falling back to `default`
/// when absent or blank.
pub(crate) fn parse_u32_param(
    value: Option<&str>,
    field: FieldName,
    default: u32,
) -> Result<u32, Error> {
    match value.map(str::trim) {
        None | Some("") => Ok(default),
        Some(raw) => raw
            .parse::<u32>()
            .map_err(|_| invalid_integer_error(field, raw)),
    }
}
