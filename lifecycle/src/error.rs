//! Error types for lifecycle operations.
//!
//! Nothing here is fatal to the process: every failure is local to one
//! operation and recoverable by an explicit user retry. Stale cache
//! references never surface as errors — the lifecycle self-heals them.

use bookstall_core::{ApiError, StoreError};
use thiserror::Error;

/// Errors returned by [`BuyRequestLifecycle`](crate::BuyRequestLifecycle) operations
#[derive(Error, Debug)]
pub enum LifecycleError {
    /// The buyer profile is missing required contact fields
    ///
    /// Raised by local validation before any network call is made.
    #[error("Incomplete buyer profile: missing {}", .missing.join(", "))]
    IncompleteProfile {
        /// Names of the empty fields
        missing: Vec<&'static str>,
    },

    /// The backend rejected the creation, or the call never completed
    #[error("Failed to create buy request")]
    RequestCreationFailed(#[source] ApiError),

    /// The buyer's stored profile could not be fetched
    #[error("Failed to look up buyer profile")]
    ProfileLookupFailed(#[source] ApiError),

    /// The backend rejected the resolution, or the call never completed
    ///
    /// Covers double-resolution rejections: the backend is the single source
    /// of truth and the client surfaces its refusal instead of assuming
    /// success.
    #[error("Failed to resolve buy request")]
    ResolutionFailed(#[source] ApiError),

    /// A request or catalog listing could not be fetched
    #[error("Failed to fetch listing")]
    ListFailed(#[source] ApiError),

    /// The local request-id cache failed
    #[error(transparent)]
    Cache(#[from] StoreError),
}
