//! Local request-id cache capability.
//!
//! After a buy request is created, the client remembers its id per book so a
//! restarted app can resume status tracking. The cache is a resume hint, not
//! a source of truth: the backend may have cleaned the request up, in which
//! case the lifecycle evicts the stale entry on the next lookup.
//!
//! The trait is deliberately tiny (`get`/`put`/`evict`) so it can be backed
//! by any key-value persistence. The logical key space matches the source
//! app's device storage: one entry per book under `buyRequestId_<book_id>`.

use crate::ids::{BookId, RequestId};
use std::future::Future;
use std::pin::Pin;
use thiserror::Error;

/// Errors raised by the cache backend
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The underlying key-value store failed
    #[error("Cache backend error: {0}")]
    Backend(String),
}

/// Storage key for a book's active request id
#[must_use]
pub fn cache_key(book_id: BookId) -> String {
    format!("buyRequestId_{book_id}")
}

/// Per-book cache of the active buy-request id.
///
/// # Dyn Compatibility
///
/// Uses explicit `Pin<Box<dyn Future>>` returns instead of `async fn` so the
/// lifecycle can hold an `Arc<dyn RequestIdCache>`.
pub trait RequestIdCache: Send + Sync {
    /// Looks up the cached request id for a book
    ///
    /// Returns `Ok(None)` when no entry exists — that is the normal state for
    /// a book the buyer never requested, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] if the store itself fails.
    fn get(
        &self,
        book_id: BookId,
    ) -> Pin<Box<dyn Future<Output = Result<Option<RequestId>, StoreError>> + Send + '_>>;

    /// Stores the request id for a book, replacing any previous entry
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] if the store itself fails.
    fn put(
        &self,
        book_id: BookId,
        request_id: RequestId,
    ) -> Pin<Box<dyn Future<Output = Result<(), StoreError>> + Send + '_>>;

    /// Removes the entry for a book, if any
    ///
    /// Evicting an absent entry is a no-op, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] if the store itself fails.
    fn evict(
        &self,
        book_id: BookId,
    ) -> Pin<Box<dyn Future<Output = Result<(), StoreError>> + Send + '_>>;
}
