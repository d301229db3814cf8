/// Errors produced by the `registry-core` crate.
///
/// Every variant is a caller mistake: the messages are single-line and safe
/// to hand back to an HTTP client verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum CoreError {
    /// The identifier path segment was empty.
    #[error("missing device id")]
    MissingDeviceId,

    /// The identifier path segment contained a path separator.
    #[error("invalid route")]
    InvalidRoute,

    /// The identifier was not hyphenated UUID text.
    #[error("invalid device id format")]
    InvalidDeviceId,

    /// A required creation field was empty after trimming.
    #[error("{field} is required")]
    MissingField { field: &'static str },

    /// The `limit` query parameter was not a positive integer.
    #[error("invalid limit parameter")]
    InvalidLimit,

    /// The `offset` query parameter was not a non-negative integer.
    #[error("invalid offset parameter")]
    InvalidOffset,

    /// The query string could not be decoded as form data.
    #[error("invalid query string: {reason}")]
    InvalidQuery { reason: String },
}
