//! Error types for the gateway crate.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use registry_core::{CoreError, DeviceId};
use registry_store::StoreError;

/// Errors that can occur during gateway request handling.
///
/// Every variant renders as a single-line `text/plain` body.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ApiError {
    /// The request was malformed: bad body, blank field, bad id or bad query.
    #[error("{0}")]
    Validation(String),

    /// Lookup by id found no record.
    #[error("device not found")]
    NotFound(DeviceId),

    /// The endpoint does not accept the request method.
    #[error("method not allowed")]
    MethodNotAllowed { allow: &'static str },

    /// The store failed. The store's message is passed on to the caller.
    #[error("failed to {action}: {source}")]
    Store {
        action: &'static str,
        #[source]
        source: StoreError,
    },
}

impl ApiError {
    /// Wrap a store failure, turning the not-found signal into [`ApiError::NotFound`].
    #[must_use]
    pub fn from_store(action: &'static str, source: StoreError) -> Self {
        match source {
            StoreError::NotFound(id) => Self::NotFound(id),
            source => Self::Store { action, source },
        }
    }

    /// HTTP status this error maps to.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ApiError::MethodNotAllowed { allow } => {
                (status, [(header::ALLOW, *allow)], self.to_string()).into_response()
            }
            ApiError::Store { .. } => {
                tracing::error!(error = %self, "store call failed");
                (status, self.to_string()).into_response()
            }
            ApiError::Validation(reason) => {
                tracing::warn!(%reason, "request rejected");
                (status, self.to_string()).into_response()
            }
            ApiError::NotFound(id) => {
                tracing::debug!(device_id = %id, "device not found");
                (status, self.to_string()).into_response()
            }
        }
    }
}
