//! Deadline-bound store calls.

use std::future::Future;
use std::time::Duration;

use crate::StoreError;

/// Deadline applied to every store call made on behalf of a request.
pub const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_secs(3);

/// Run a store future, failing with [`StoreError::Timeout`] once `limit` elapses.
///
/// The store future is polled inside the caller's own future, so dropping the
/// caller (for example when the client disconnects) drops the store call too.
///
/// # Errors
/// Returns [`StoreError::Timeout`] on expiry, otherwise whatever `call` returns.
pub async fn with_deadline<T, F>(limit: Duration, call: F) -> Result<T, StoreError>
where
    F: Future<Output = Result<T, StoreError>>,
{
    match tokio::time::timeout(limit, call).await {
        Ok(result) => result,
        Err(_) => {
            tracing::warn!(timeout = ?limit, "store call exceeded deadline");
            Err(StoreError::Timeout(limit))
        }
    }
}
