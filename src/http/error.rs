//! Mapping from crate errors to HTTP responses.
//!
//! Client-facing failures keep their message; storage and other internal failures are
//! logged and replaced by a generic message.

use crate::errors::Error;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

/// JSON body of every error response
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Stable machine-readable code
    pub code: &'static str,
    /// Human-readable description
    pub message: String,
}

impl Error {
    /// HTTP status and error code for this error.
    #[must_use]
    pub const fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::Validation { .. } => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            Self::SystemInactive => (StatusCode::FORBIDDEN, "SYSTEM_INACTIVE"),
            Self::TicketNotFound { .. } => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            Self::QueueEmpty => (StatusCode::NOT_FOUND, "QUEUE_EMPTY"),
            Self::NotificationFailed { .. } => (StatusCode::BAD_GATEWAY, "NOTIFICATION_FAILED"),
            Self::Encoding { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "ENCODING_ERROR"),
            Self::Config { .. } | Self::Database(_) | Self::Io(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let message = if status.is_server_error() && status != StatusCode::BAD_GATEWAY {
            error!(error = %self, "Request failed");
            "Internal server error".to_string()
        } else {
            self.to_string()
        };
        (status, Json(ErrorBody { code, message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distinct_codes_for_not_found_and_empty_queue() {
        let (not_found_status, not_found_code) =
            Error::TicketNotFound { id: 1 }.status_and_code();
        let (empty_status, empty_code) = Error::QueueEmpty.status_and_code();

        assert_eq!(not_found_status, StatusCode::NOT_FOUND);
        assert_eq!(empty_status, StatusCode::NOT_FOUND);
        assert_ne!(not_found_code, empty_code);
    }

    #[test]
    fn test_internal_errors_are_masked() {
        let response = Error::Database(sea_orm::DbErr::Custom("disk on fire".to_string()))
            .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = Error::SystemInactive.into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}
