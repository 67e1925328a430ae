//! Storefront API abstraction and wire payloads.
//!
//! The backend owns the exact wire shapes; this module pins down the contract
//! the client depends on. [`StorefrontApi`] is the seam between the lifecycle
//! logic and the transport: production code plugs in the REST client from
//! `bookstall-api`, tests plug in an in-memory storefront.

use crate::book::Book;
use crate::credential::CredentialError;
use crate::ids::{BookId, RequestId, UserId};
use crate::request::{BuyRequest, BuyerProfile, Decision, RequestStatus};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::pin::Pin;
use thiserror::Error;

/// Errors that can occur when talking to the storefront backend.
#[derive(Error, Debug)]
pub enum ApiError {
    /// No credential available to attach to the request
    #[error(transparent)]
    Credential(#[from] CredentialError),

    /// The backend rejected the credential (HTTP 401)
    #[error("Unauthorized: backend rejected the bearer token")]
    Unauthorized,

    /// The referenced entity does not exist backend-side (HTTP 404)
    #[error("Not found")]
    NotFound,

    /// The backend answered with a non-success status
    #[error("Backend error (status {status}): {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, as returned by the backend
        message: String,
    },

    /// The request never completed (connection failure, timeout)
    #[error("Transport error: {0}")]
    Transport(String),

    /// The response body could not be decoded
    #[error("Response decoding failed: {0}")]
    Decode(String),
}

impl ApiError {
    /// Whether this error means the referenced entity is gone
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    /// Whether a retry could plausibly succeed without any state change
    ///
    /// Transport failures and 5xx responses are transient; everything else is
    /// a definite rejection.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        match self {
            Self::Transport(_) => true,
            Self::Status { status, .. } => *status >= 500,
            Self::Credential(_) | Self::Unauthorized | Self::NotFound | Self::Decode(_) => false,
        }
    }
}

/// Payload submitted to create a buy request
///
/// Carries the buyer contact snapshot; the backend identifies the buyer from
/// the bearer token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBuyRequest {
    /// Book being requested
    pub book_id: BookId,
    /// Buyer name snapshot
    pub buyer_name: String,
    /// Buyer phone snapshot
    pub buyer_phone: String,
    /// Buyer address snapshot
    pub buyer_location: String,
}

impl NewBuyRequest {
    /// Builds the payload from a book id and the buyer's profile
    #[must_use]
    pub fn for_book(book_id: BookId, profile: &BuyerProfile) -> Self {
        Self {
            book_id,
            buyer_name: profile.name.clone(),
            buyer_phone: profile.phone.clone(),
            buyer_location: profile.address.clone(),
        }
    }
}

/// Backend acknowledgment of a created request
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedRequest {
    /// Human-readable confirmation message
    pub message: String,
    /// Identifier of the freshly created request
    #[serde(rename = "buyRequestId")]
    pub buy_request_id: RequestId,
}

/// Backend confirmation of a resolution
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionReceipt {
    /// The request that was resolved
    pub request_id: RequestId,
    /// Its new, terminal status
    pub status: RequestStatus,
}

/// Storefront backend operations the client depends on.
///
/// # Dyn Compatibility
///
/// Uses explicit `Pin<Box<dyn Future>>` returns instead of `async fn` so
/// callers can hold an `Arc<dyn StorefrontApi>` and tests can substitute a
/// recording mock.
pub trait StorefrontApi: Send + Sync {
    /// Creates a buy request; the backend assigns its id
    ///
    /// # Errors
    ///
    /// Any [`ApiError`]; duplicate-request rejections arrive as
    /// [`ApiError::Status`].
    fn create_request(
        &self,
        payload: NewBuyRequest,
    ) -> Pin<Box<dyn Future<Output = Result<CreatedRequest, ApiError>> + Send + '_>>;

    /// Reads the current status of a request
    ///
    /// # Errors
    ///
    /// [`ApiError::NotFound`] when the backend no longer recognizes the
    /// request id; other [`ApiError`] variants for transport and rejection.
    fn check_status(
        &self,
        request_id: RequestId,
    ) -> Pin<Box<dyn Future<Output = Result<RequestStatus, ApiError>> + Send + '_>>;

    /// Lists requests addressed to the authenticated owner, any status
    ///
    /// Backend order is preserved; the result is fully materialized.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`].
    fn owner_requests(
        &self,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<BuyRequest>, ApiError>> + Send + '_>>;

    /// Lists requests created by the given buyer, any status
    ///
    /// # Errors
    ///
    /// Any [`ApiError`].
    fn buyer_requests(
        &self,
        buyer_id: UserId,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<BuyRequest>, ApiError>> + Send + '_>>;

    /// Submits the owner's decision on a pending request
    ///
    /// # Errors
    ///
    /// Double resolutions are rejected backend-side and surface as
    /// [`ApiError::Status`]; other variants for transport failures.
    fn resolve(
        &self,
        request_id: RequestId,
        decision: Decision,
    ) -> Pin<Box<dyn Future<Output = Result<ResolutionReceipt, ApiError>> + Send + '_>>;

    /// Fetches the stored contact profile of a user
    ///
    /// # Errors
    ///
    /// Any [`ApiError`].
    fn buyer_profile(
        &self,
        user_id: UserId,
    ) -> Pin<Box<dyn Future<Output = Result<BuyerProfile, ApiError>> + Send + '_>>;

    /// Lists the full book catalog
    ///
    /// # Errors
    ///
    /// Any [`ApiError`].
    fn list_books(
        &self,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<Book>, ApiError>> + Send + '_>>;
}
