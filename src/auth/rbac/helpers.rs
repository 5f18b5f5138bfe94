//! RBAC helper functions

use crate::utils::error::{AccessError, Result};
use std::future::Future;
use std::time::Duration;

/// Bound a store or RPC round trip by `limit`
pub(super) async fn bounded<T, F>(limit: Duration, operation: &str, future: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match tokio::time::timeout(limit, future).await {
        Ok(result) => result,
        Err(_) => Err(AccessError::timeout(format!(
            "{} did not complete within {:?}",
            operation, limit
        ))),
    }
}

/// Collapse any store failure on a write path into `PersistenceFailed`
pub(super) fn persistence_failure(operation: &str, err: AccessError) -> AccessError {
    match err {
        AccessError::PersistenceFailed(_) => err,
        other => AccessError::persistence(format!("{}: {}", operation, other)),
    }
}
