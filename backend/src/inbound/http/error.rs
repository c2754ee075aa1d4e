//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while allowing Actix
//! handlers to turn domain failures into consistent JSON responses and
//! status codes.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use tracing::error;

use crate::domain::{Error, ErrorCode};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::Forbidden => StatusCode::FORBIDDEN,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Conflict => StatusCode::CONFLICT,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn redact_if_internal(err: &Error) -> Error {
    if matches!(err.code(), ErrorCode::InternalError) {
        Error::internal("Internal server error")
    } else {
        err.clone()
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(redact_if_internal(self))
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        // Do not leak implementation details to clients.
        error!(error = %err, "actix error promoted to domain error");
        Self::internal("Internal server error")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::Value;

    #[rstest]
    #[case::invalid(ErrorCode::InvalidRequest, StatusCode::BAD_REQUEST)]
    #[case::unauthorized(ErrorCode::Unauthorized, StatusCode::UNAUTHORIZED)]
    #[case::not_found(ErrorCode::NotFound, StatusCode::NOT_FOUND)]
    #[case::conflict(ErrorCode::Conflict, StatusCode::CONFLICT)]
    #[case::unavailable(ErrorCode::ServiceUnavailable, StatusCode::SERVICE_UNAVAILABLE)]
    #[case::internal(ErrorCode::InternalError, StatusCode::INTERNAL_SERVER_ERROR)]
    fn maps_codes_to_status(#[case] code: ErrorCode, #[case] expected: StatusCode) {
        let err = Error::new(code, "boom");
        assert_eq!(err.status_code(), expected);
    }

    #[rstest]
    fn internal_messages_are_redacted() {
        let err = Error::internal("secret connection string");
        let response = err.error_response();
        let body = actix_web::body::to_bytes(response.into_body());
        let bytes = actix_rt::System::new().block_on(body).expect("body read");
        let value: Value = serde_json::from_slice(&bytes).expect("error payload");
        assert_eq!(
            value.get("message").and_then(Value::as_str),
            Some("Internal server error")
        );
    }

    #[rstest]
    fn non_internal_messages_pass_through() {
        let err = Error::conflict("you already voted for this pitch");
        let response = err.error_response();
        let body = actix_web::body::to_bytes(response.into_body());
        let bytes = actix_rt::System::new().block_on(body).expect("body read");
        let value: Value = serde_json::from_slice(&bytes).expect("error payload");
        assert_eq!(
            value.get("message").and_then(Value::as_str),
            Some("you already voted for this pitch")
        );
        assert_eq!(value.get("code").and_then(Value::as_str), Some("conflict"));
    }
}
