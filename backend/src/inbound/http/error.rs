//! Renders domain errors as JSON responses.
//!
//! Every failure leaves with `Cache-Control: no-store`, the `trace-id` header
//! when one was captured, and the body produced by [`Error::public`].

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::error;

use super::cache_control::no_store_header;
use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER, error::REDACTED_MESSAGE};

/// Result type returned by the storefront handlers.
pub type ApiResult<T> = Result<T, Error>;

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self.code() {
            ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.code() == ErrorCode::InternalError {
            error!(
                message = self.message(),
                trace_id = self.trace_id(),
                "responding with redacted internal error"
            );
        }

        let mut response = HttpResponse::build(self.status_code());
        response.insert_header(no_store_header());
        if let Some(id) = self.trace_id() {
            response.insert_header((TRACE_ID_HEADER, id));
        }
        response.json(self.public())
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        error!(error = %err, "framework error surfaced in a handler");
        Self::internal(REDACTED_MESSAGE)
    }
}
