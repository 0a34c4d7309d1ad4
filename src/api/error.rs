//
//  incidentio-client
//  api/error.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Error types for incident.io API operations.
//!
//! Every failure surfaced by the client falls into one of four groups:
//!
//! | Group | Variants | Network call made? |
//! |-------|----------|--------------------|
//! | Caller error | `MissingId`, `InvalidValue` | No |
//! | Transport error | `Transport` | Yes, but no usable response |
//! | API error | `Api` | Yes, non-success status |
//! | Decode error | `Decode`, `Encode` | Depends |
//!
//! Non-success responses are decoded into an [`ErrorResponse`], which keeps
//! the status code so callers can classify it:
//!
//! ```rust
//! use incidentio_client::api::error::decode_error;
//! use reqwest::StatusCode;
//!
//! let body = br#"{"type":"not_found","status":404,"request_id":"r1","errors":[]}"#;
//! let err = decode_error(StatusCode::NOT_FOUND, body).unwrap();
//! assert!(err.is_status(404));
//! ```
//!
//! # Notes
//!
//! - None of these errors are retried by the client; retry policy belongs
//!   to the caller.
//! - A 404 on read or delete is still an error here. Whether it means
//!   "already absent" is decided by [`crate::manager`].

use std::fmt;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for all incident.io client operations.
#[derive(Error, Debug)]
pub enum ApiError {
    /// An operation that needs a resource id was called with an empty one.
    ///
    /// Rejected before any request is built.
    #[error("you must specify an ID to {operation}")]
    MissingId {
        /// The verb that was refused (`get`, `update` or `delete`).
        operation: &'static str,
    },

    /// An input value falls outside what the API accepts.
    ///
    /// Raised for unknown enumeration values and for strings that break a
    /// length limit.
    #[error("invalid {field} '{value}': expected {expected}")]
    InvalidValue {
        /// Name of the offending attribute.
        field: &'static str,
        /// The rejected value, as given.
        value: String,
        /// Human-readable description of the accepted values.
        expected: String,
    },

    /// The request never produced a usable response.
    ///
    /// Covers DNS and connection failures, timeouts and failures while
    /// reading the response body.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a status the operation does not accept.
    #[error("{0}")]
    Api(ErrorResponse),

    /// A response body was not the JSON shape the operation expects.
    #[error("failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),

    /// A request body could not be serialized.
    #[error("failed to encode request: {0}")]
    Encode(#[source] serde_json::Error),
}

impl ApiError {
    /// Returns the HTTP status carried by an [`ApiError::Api`] error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api(response) => Some(response.status),
            _ => None,
        }
    }

    /// Checks whether this error represents HTTP status `status`.
    ///
    /// Only API errors carry a status; every other variant returns `false`.
    pub fn is_status(&self, status: u16) -> bool {
        self.status() == Some(status)
    }

    /// Shorthand for `is_status(404)`.
    pub fn is_not_found(&self) -> bool {
        self.is_status(404)
    }

    /// Checks whether the failure happened below the HTTP layer.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Checks whether the error was raised before any request was sent.
    pub fn is_caller_error(&self) -> bool {
        matches!(self, Self::MissingId { .. } | Self::InvalidValue { .. })
    }
}

/// Checks whether `result` failed with HTTP status `status`.
///
/// Convenience for callers holding a `Result` rather than the error itself.
///
/// ```rust
/// use incidentio_client::api::error::{is_error_status, ApiError};
///
/// let ok: Result<(), ApiError> = Ok(());
/// assert!(!is_error_status(&ok, 404));
/// ```
pub fn is_error_status<T>(result: &Result<T, ApiError>, status: u16) -> bool {
    matches!(result, Err(err) if err.is_status(status))
}

/// Decoded body of a non-success incident.io response.
///
/// The API reports failures as:
///
/// ```json
/// {
///   "type": "validation_error",
///   "status": 422,
///   "request_id": "3c9db5ec-36f4-4eed-8bd1-0d9229de7c35",
///   "errors": [
///     {"code": "invalid_value", "message": "...", "source": {"field": "", "pointer": "shortform"}}
///   ]
/// }
/// ```
///
/// The `Display` form is the category followed by every sub-error as
/// `code:message`, in order:
///
/// ```text
/// validation_error: invalid_value:Shortform must be unique
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Machine-readable category, e.g. `validation_error`.
    #[serde(rename = "type")]
    pub kind: String,

    /// HTTP status the API associated with the error.
    #[serde(default)]
    pub status: u16,

    /// Correlation id for support requests.
    #[serde(default)]
    pub request_id: String,

    /// Individual problems, in the order the API listed them.
    #[serde(default)]
    pub errors: Vec<ErrorDetail>,
}

/// One entry of [`ErrorResponse::errors`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,

    /// Which submitted attribute triggered the error, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<ErrorSource>,
}

/// Locator for the attribute an [`ErrorDetail`] refers to.
///
/// The API fills either or both of the fields; `pointer` usually names the
/// JSON attribute (`shortform`), `field` is often empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorSource {
    #[serde(default)]
    pub field: String,
    #[serde(default)]
    pub pointer: String,
}

impl ErrorResponse {
    /// Builds the error used when a failed response carried no body.
    pub fn from_status(status: StatusCode) -> Self {
        Self {
            kind: "http_error".to_string(),
            status: status.as_u16(),
            request_id: String::new(),
            errors: Vec::new(),
        }
    }

    /// Checks whether this error is associated with HTTP status `status`.
    pub fn is_status(&self, status: u16) -> bool {
        self.status == status
    }
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        for detail in &self.errors {
            write!(f, ": {}:{}", detail.code, detail.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ErrorResponse {}

/// Decodes the body of a non-success response.
///
/// An empty (or whitespace-only) body yields [`ErrorResponse::from_status`].
/// A body without a `status` field takes the HTTP status of the response.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] when the body is present but is not the
/// documented error shape. The malformed body is never replaced by a
/// default value.
pub fn decode_error(status: StatusCode, body: &[u8]) -> Result<ErrorResponse, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(ErrorResponse::from_status(status));
    }

    let mut response: ErrorResponse = serde_json::from_slice(body).map_err(ApiError::Decode)?;
    if response.status == 0 {
        response.status = status.as_u16();
    }

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALIDATION_BODY: &str = r#"{"type":"validation_error","status":422,"request_id":"r1","errors":[{"code":"invalid_value","message":"Shortform must be unique","source":{"field":"","pointer":"shortform"}}]}"#;

    #[test]
    fn test_decode_validation_error() {
        let err = decode_error(StatusCode::UNPROCESSABLE_ENTITY, VALIDATION_BODY.as_bytes()).unwrap();

        assert_eq!(err.status, 422);
        assert_eq!(err.request_id, "r1");
        assert_eq!(err.errors.len(), 1);
        assert_eq!(err.errors[0].code, "invalid_value");

        let source = err.errors[0].source.as_ref().unwrap();
        assert_eq!(source.field, "");
        assert_eq!(source.pointer, "shortform");

        assert_eq!(
            err.to_string(),
            "validation_error: invalid_value:Shortform must be unique"
        );
    }

    #[test]
    fn test_display_keeps_every_sub_error() {
        let body = r#"{"type":"validation_error","status":422,"request_id":"r2","errors":[
            {"code":"missing","message":"Name is required"},
            {"code":"too_long","message":"Description is too long"}
        ]}"#;
        let err = decode_error(StatusCode::UNPROCESSABLE_ENTITY, body.as_bytes()).unwrap();

        assert!(err.errors[0].source.is_none());
        assert_eq!(
            err.to_string(),
            "validation_error: missing:Name is required: too_long:Description is too long"
        );
    }

    #[test]
    fn test_display_without_sub_errors() {
        let err = ErrorResponse::from_status(StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "http_error");
    }

    #[test]
    fn test_is_status_matches_status_field_only() {
        let body = r#"{"type":"not_found","status":404,"request_id":"r3","errors":[]}"#;
        let err = decode_error(StatusCode::BAD_REQUEST, body.as_bytes()).unwrap();

        assert!(err.is_status(404));
        assert!(!err.is_status(400));

        let api_err = ApiError::Api(err);
        assert!(api_err.is_not_found());
        assert_eq!(api_err.status(), Some(404));
    }

    #[test]
    fn test_empty_body_uses_http_status() {
        let err = decode_error(StatusCode::NOT_FOUND, b"").unwrap();
        assert_eq!(err.status, 404);
        assert_eq!(err.kind, "http_error");
        assert!(err.errors.is_empty());
    }

    #[test]
    fn test_missing_status_field_uses_http_status() {
        let body = r#"{"type":"forbidden","request_id":"r4"}"#;
        let err = decode_error(StatusCode::FORBIDDEN, body.as_bytes()).unwrap();
        assert!(err.is_status(403));
    }

    #[test]
    fn test_malformed_body_is_decode_error() {
        let err = decode_error(StatusCode::BAD_GATEWAY, b"<html>bad gateway</html>").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
        assert!(!err.is_status(502));
    }

    #[test]
    fn test_non_api_errors_have_no_status() {
        let err = ApiError::MissingId { operation: "get" };
        assert!(err.is_caller_error());
        assert!(!err.is_not_found());
        assert!(!err.is_transport());
        assert_eq!(err.to_string(), "you must specify an ID to get");

        let result: Result<(), ApiError> = Err(err);
        assert!(!is_error_status(&result, 404));
    }

    #[test]
    fn test_is_error_status_on_result() {
        let result: Result<(), ApiError> =
            Err(ApiError::Api(ErrorResponse::from_status(StatusCode::NOT_FOUND)));
        assert!(is_error_status(&result, 404));
        assert!(!is_error_status(&result, 500));
    }
}
