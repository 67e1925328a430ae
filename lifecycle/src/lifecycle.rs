//! The buy-request lifecycle component.

use crate::error::LifecycleError;
use bookstall_core::{
    Book, BookId, BuyRequest, BuyerProfile, Decision, NewBuyRequest, RequestId, RequestIdCache,
    ResolutionReceipt, ServiceType, StatusProbe, StorefrontApi, UserId,
};
use std::sync::Arc;

/// Combined result of a pull-to-refresh
#[derive(Clone, Debug, PartialEq)]
pub struct RefreshSnapshot {
    /// Pending requests addressed to the user as an owner
    pub incoming_pending: Vec<BuyRequest>,
    /// The user's own requests as a buyer, any status
    pub my_orders: Vec<BuyRequest>,
}

/// Creates, queries, and resolves buy requests.
///
/// The component reconciles the local request-id cache with the
/// backend-authoritative state:
///
/// - on creation, the new request id is cached per book before returning, so
///   a restarted app resumes status tracking;
/// - on lookup, a backend not-found evicts the stale cache entry (self-heal)
///   and reports "no active request";
/// - status transitions only ever happen backend-side.
///
/// No operation retries automatically. Retries are user-initiated
/// (pull-to-refresh, explicit resubmit) so a failed call can never turn into
/// a duplicate request or a duplicate resolution.
#[derive(Clone)]
pub struct BuyRequestLifecycle {
    api: Arc<dyn StorefrontApi>,
    cache: Arc<dyn RequestIdCache>,
}

impl BuyRequestLifecycle {
    /// Creates a lifecycle over the given backend and cache capabilities
    #[must_use]
    pub fn new(api: Arc<dyn StorefrontApi>, cache: Arc<dyn RequestIdCache>) -> Self {
        Self { api, cache }
    }

    /// Submits a buy request for a book, snapshotting the buyer's contact info
    ///
    /// On success the returned id is already persisted in the cache under the
    /// book. The backend creates exactly one request per successful call.
    ///
    /// Requesting one's own book is a caller-side logic error; if it slips
    /// through, the backend rejection surfaces as `RequestCreationFailed`.
    ///
    /// # Errors
    ///
    /// - [`LifecycleError::IncompleteProfile`] if contact fields are missing;
    ///   no network call is made
    /// - [`LifecycleError::RequestCreationFailed`] on backend rejection or
    ///   transport failure; the cache is left untouched
    /// - [`LifecycleError::Cache`] if persisting the id fails
    pub async fn create_request(
        &self,
        book: &Book,
        profile: &BuyerProfile,
    ) -> Result<RequestId, LifecycleError> {
        let missing = profile.missing_fields();
        if !missing.is_empty() {
            tracing::warn!(?missing, "Buy request blocked by incomplete profile");
            return Err(LifecycleError::IncompleteProfile { missing });
        }

        let payload = NewBuyRequest::for_book(book.id, profile);
        let created = self
            .api
            .create_request(payload)
            .await
            .map_err(LifecycleError::RequestCreationFailed)?;

        // Persist before returning so a restart can resume tracking
        self.cache.put(book.id, created.buy_request_id).await?;
        tracing::debug!(book_id = %book.id, request_id = %created.buy_request_id, "Buy request created");
        Ok(created.buy_request_id)
    }

    /// Submits a buy request using the buyer's profile stored backend-side
    ///
    /// Fetches the stored contact details first, then proceeds as
    /// [`create_request`](Self::create_request) — including the completeness
    /// check, since a stored profile can be missing its phone or address.
    ///
    /// # Errors
    ///
    /// [`LifecycleError::ProfileLookupFailed`] if the profile fetch fails,
    /// plus everything [`create_request`](Self::create_request) can return.
    pub async fn create_request_for_user(
        &self,
        book: &Book,
        buyer: UserId,
    ) -> Result<RequestId, LifecycleError> {
        let profile = self
            .api
            .buyer_profile(buyer)
            .await
            .map_err(LifecycleError::ProfileLookupFailed)?;
        self.create_request(book, &profile).await
    }

    /// Reports the status of the active request for a book, if any
    ///
    /// - No cached id: [`StatusProbe::None`], no network call.
    /// - Cached id confirmed by the backend: [`StatusProbe::Known`].
    /// - Backend no longer recognizes the id: the stale entry is evicted and
    ///   the probe is [`StatusProbe::None`] — after this self-heal the book
    ///   behaves exactly as if no request had ever been created.
    /// - Lookup failed (network, backend error): [`StatusProbe::Unknown`],
    ///   cache kept. Distinct from `None` so callers never render "no
    ///   request found" when the truth is "could not tell".
    ///
    /// # Errors
    ///
    /// Only [`LifecycleError::Cache`]; lookup failures are reported through
    /// the probe, not as errors.
    pub async fn status(&self, book_id: BookId) -> Result<StatusProbe, LifecycleError> {
        let Some(request_id) = self.cache.get(book_id).await? else {
            return Ok(StatusProbe::None);
        };

        match self.api.check_status(request_id).await {
            Ok(status) => Ok(StatusProbe::Known(status)),
            Err(error) if error.is_not_found() => {
                tracing::debug!(%book_id, %request_id, "Evicting stale request reference");
                self.cache.evict(book_id).await?;
                Ok(StatusProbe::None)
            },
            Err(error) => {
                tracing::warn!(%book_id, %request_id, %error, "Status lookup failed");
                Ok(StatusProbe::Unknown)
            },
        }
    }

    /// Lists pending requests addressed to the authenticated owner
    ///
    /// The backend may return requests of any status; only `pending` ones are
    /// kept, in backend order. Read-only and side-effect-free.
    ///
    /// # Errors
    ///
    /// [`LifecycleError::ListFailed`] if the fetch fails.
    pub async fn list_pending_for_owner(&self) -> Result<Vec<BuyRequest>, LifecycleError> {
        let mut requests = self
            .api
            .owner_requests()
            .await
            .map_err(LifecycleError::ListFailed)?;
        requests.retain(BuyRequest::is_pending);
        Ok(requests)
    }

    /// Lists the buyer's own requests, any status, in backend order
    ///
    /// # Errors
    ///
    /// [`LifecycleError::ListFailed`] if the fetch fails.
    pub async fn list_mine(&self, buyer: UserId) -> Result<Vec<BuyRequest>, LifecycleError> {
        self.api
            .buyer_requests(buyer)
            .await
            .map_err(LifecycleError::ListFailed)
    }

    /// Submits the owner's decision on a pending request
    ///
    /// Callers must not drop the request from any pending list until this
    /// returns `Ok` — the backend confirms the transition first, so a failed
    /// call leaves the UI and the backend in agreement.
    ///
    /// # Errors
    ///
    /// [`LifecycleError::ResolutionFailed`] on rejection (including a second
    /// resolution of an already-resolved request) or transport failure.
    pub async fn resolve(
        &self,
        request_id: RequestId,
        decision: Decision,
    ) -> Result<ResolutionReceipt, LifecycleError> {
        let receipt = self
            .api
            .resolve(request_id, decision)
            .await
            .map_err(LifecycleError::ResolutionFailed)?;
        tracing::debug!(%request_id, status = %receipt.status, "Buy request resolved");
        Ok(receipt)
    }

    /// Drops the cached request id for a book
    ///
    /// Used on tracked-screen teardown. Local only; the backend request, if
    /// any, is unaffected.
    ///
    /// # Errors
    ///
    /// [`LifecycleError::Cache`] if the store fails.
    pub async fn forget(&self, book_id: BookId) -> Result<(), LifecycleError> {
        self.cache.evict(book_id).await?;
        Ok(())
    }

    /// Fetches both refresh feeds in one pull
    ///
    /// Mirrors the pull-to-refresh gesture: the owner's pending queue and the
    /// buyer's own orders, fetched concurrently. No ordering is guaranteed
    /// between the two calls.
    ///
    /// # Errors
    ///
    /// [`LifecycleError::ListFailed`] if either fetch fails.
    pub async fn refresh(&self, buyer: UserId) -> Result<RefreshSnapshot, LifecycleError> {
        let (incoming_pending, my_orders) =
            futures::try_join!(self.list_pending_for_owner(), self.list_mine(buyer))?;
        Ok(RefreshSnapshot {
            incoming_pending,
            my_orders,
        })
    }

    /// Lists the catalog entries a user has listed under a service type
    ///
    /// The catalog endpoint returns everything; filtering happens client-side.
    ///
    /// # Errors
    ///
    /// [`LifecycleError::ListFailed`] if the catalog fetch fails.
    pub async fn books_for_owner(
        &self,
        owner: UserId,
        service_type: ServiceType,
    ) -> Result<Vec<Book>, LifecycleError> {
        let mut books = self
            .api
            .list_books()
            .await
            .map_err(LifecycleError::ListFailed)?;
        books.retain(|book| book.owned_by(owner) && book.service_type == service_type);
        Ok(books)
    }
}
