//! Mock implementations of the client capabilities.
//!
//! - [`StaticTokenProvider`] / [`NoTokenProvider`]: fixed credential state
//! - [`InMemoryRequestIdCache`]: `HashMap`-backed request-id cache
//! - [`InMemoryStorefront`]: a backend stand-in that actually enforces the
//!   request lifecycle (pending-only resolution, not-found after cleanup)
//!   and counts every call, so tests can assert "zero network calls"

use bookstall_core::{
    ApiError, Book, BuyRequest, BuyerProfile, CreatedRequest, CredentialError, Decision,
    NewBuyRequest, RequestId, RequestStatus, ResolutionReceipt, StorefrontApi, TokenProvider,
    UserId, cache_key,
};
use bookstall_core::{BookId, RequestIdCache, StoreError};
use std::collections::{HashMap, VecDeque};
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

fn lock_unpoisoned<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Token provider that always returns the same token
#[derive(Debug, Clone)]
pub struct StaticTokenProvider {
    token: String,
}

impl StaticTokenProvider {
    /// Creates a provider holding the given token
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl TokenProvider for StaticTokenProvider {
    fn bearer_token(&self) -> Result<String, CredentialError> {
        Ok(self.token.clone())
    }
}

/// Token provider for the logged-out state
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTokenProvider;

impl TokenProvider for NoTokenProvider {
    fn bearer_token(&self) -> Result<String, CredentialError> {
        Err(CredentialError::Unauthenticated)
    }
}

/// In-memory request-id cache
///
/// Stores entries under the same `buyRequestId_<book_id>` keys the device
/// storage uses, so key scoping is exercised too.
#[derive(Debug, Default)]
pub struct InMemoryRequestIdCache {
    entries: Mutex<HashMap<String, RequestId>>,
}

impl InMemoryRequestIdCache {
    /// Creates an empty cache
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries currently cached (for assertions)
    #[must_use]
    pub fn len(&self) -> usize {
        lock_unpoisoned(&self.entries).len()
    }

    /// Whether the cache holds no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl RequestIdCache for InMemoryRequestIdCache {
    fn get(
        &self,
        book_id: BookId,
    ) -> Pin<Box<dyn Future<Output = Result<Option<RequestId>, StoreError>> + Send + '_>> {
        Box::pin(async move {
            Ok(lock_unpoisoned(&self.entries)
                .get(&cache_key(book_id))
                .copied())
        })
    }

    fn put(
        &self,
        book_id: BookId,
        request_id: RequestId,
    ) -> Pin<Box<dyn Future<Output = Result<(), StoreError>> + Send + '_>> {
        Box::pin(async move {
            lock_unpoisoned(&self.entries).insert(cache_key(book_id), request_id);
            Ok(())
        })
    }

    fn evict(
        &self,
        book_id: BookId,
    ) -> Pin<Box<dyn Future<Output = Result<(), StoreError>> + Send + '_>> {
        Box::pin(async move {
            lock_unpoisoned(&self.entries).remove(&cache_key(book_id));
            Ok(())
        })
    }
}

/// Per-operation call counts recorded by [`InMemoryStorefront`]
#[derive(Debug, Default)]
pub struct CallCounts {
    /// Calls to `create_request`
    pub create: AtomicUsize,
    /// Calls to `check_status`
    pub check_status: AtomicUsize,
    /// Calls to `owner_requests`
    pub owner_list: AtomicUsize,
    /// Calls to `buyer_requests`
    pub buyer_list: AtomicUsize,
    /// Calls to `resolve`
    pub resolve: AtomicUsize,
    /// Calls to `buyer_profile`
    pub profile: AtomicUsize,
    /// Calls to `list_books`
    pub books: AtomicUsize,
}

impl CallCounts {
    /// Total calls across all operations
    #[must_use]
    pub fn total(&self) -> usize {
        self.create.load(Ordering::SeqCst)
            + self.check_status.load(Ordering::SeqCst)
            + self.owner_list.load(Ordering::SeqCst)
            + self.buyer_list.load(Ordering::SeqCst)
            + self.resolve.load(Ordering::SeqCst)
            + self.profile.load(Ordering::SeqCst)
            + self.books.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Default)]
struct StorefrontState {
    next_id: i64,
    requests: Vec<BuyRequest>,
    books: Vec<Book>,
    profiles: HashMap<UserId, BuyerProfile>,
    fail_next: VecDeque<ApiError>,
}

/// In-memory storefront backend for deterministic tests.
///
/// Behaves like the real backend where the lifecycle cares: request ids are
/// assigned at creation, status lookups 404 after [`remove_request`], and a
/// second resolution of the same request is rejected with a 409.
///
/// Failure injection: [`fail_next`] queues an error that the next API call
/// (whichever operation it is) returns instead of executing.
///
/// [`remove_request`]: Self::remove_request
/// [`fail_next`]: Self::fail_next
#[derive(Debug, Default)]
pub struct InMemoryStorefront {
    state: Mutex<StorefrontState>,
    /// Call counters, one per operation
    pub calls: CallCounts,
}

impl InMemoryStorefront {
    /// Creates an empty storefront
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Mutex::new(StorefrontState {
                next_id: 900,
                ..StorefrontState::default()
            }),
            calls: CallCounts::default(),
        }
    }

    /// Adds a book to the catalog
    pub fn insert_book(&self, book: Book) {
        lock_unpoisoned(&self.state).books.push(book);
    }

    /// Stores a user's contact profile
    pub fn insert_profile(&self, user_id: UserId, profile: BuyerProfile) {
        lock_unpoisoned(&self.state).profiles.insert(user_id, profile);
    }

    /// Queues an error for the next API call
    pub fn fail_next(&self, error: ApiError) {
        lock_unpoisoned(&self.state).fail_next.push_back(error);
    }

    /// Deletes a request backend-side, simulating cleanup
    ///
    /// Subsequent status checks for the id report not-found, which is what
    /// drives the client's cache self-heal.
    pub fn remove_request(&self, request_id: RequestId) {
        lock_unpoisoned(&self.state)
            .requests
            .retain(|r| r.id != request_id);
    }

    /// Snapshot of a stored request (for assertions)
    #[must_use]
    pub fn request(&self, request_id: RequestId) -> Option<BuyRequest> {
        lock_unpoisoned(&self.state)
            .requests
            .iter()
            .find(|r| r.id == request_id)
            .cloned()
    }

    fn take_failure(&self) -> Option<ApiError> {
        lock_unpoisoned(&self.state).fail_next.pop_front()
    }
}

impl StorefrontApi for InMemoryStorefront {
    fn create_request(
        &self,
        payload: NewBuyRequest,
    ) -> Pin<Box<dyn Future<Output = Result<CreatedRequest, ApiError>> + Send + '_>> {
        Box::pin(async move {
            self.calls.create.fetch_add(1, Ordering::SeqCst);
            if let Some(error) = self.take_failure() {
                return Err(error);
            }

            let mut state = lock_unpoisoned(&self.state);
            let id = RequestId::new(state.next_id);
            state.next_id += 1;

            let title = state
                .books
                .iter()
                .find(|b| b.id == payload.book_id)
                .map_or_else(String::new, |b| b.title.clone());

            state.requests.push(BuyRequest {
                id,
                book_id: payload.book_id,
                title,
                buyer_name: payload.buyer_name,
                buyer_phone: payload.buyer_phone,
                buyer_location: payload.buyer_location,
                status: RequestStatus::Pending,
                seller_name: None,
                seller_phone: None,
                seller_location: None,
                price: None,
                rental_price: None,
                service_type: None,
            });

            Ok(CreatedRequest {
                message: "Buy request sent".to_string(),
                buy_request_id: id,
            })
        })
    }

    fn check_status(
        &self,
        request_id: RequestId,
    ) -> Pin<Box<dyn Future<Output = Result<RequestStatus, ApiError>> + Send + '_>> {
        Box::pin(async move {
            self.calls.check_status.fetch_add(1, Ordering::SeqCst);
            if let Some(error) = self.take_failure() {
                return Err(error);
            }

            lock_unpoisoned(&self.state)
                .requests
                .iter()
                .find(|r| r.id == request_id)
                .map(|r| r.status)
                .ok_or(ApiError::NotFound)
        })
    }

    fn owner_requests(
        &self,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<BuyRequest>, ApiError>> + Send + '_>> {
        Box::pin(async move {
            self.calls.owner_list.fetch_add(1, Ordering::SeqCst);
            if let Some(error) = self.take_failure() {
                return Err(error);
            }

            Ok(lock_unpoisoned(&self.state).requests.clone())
        })
    }

    fn buyer_requests(
        &self,
        _buyer_id: UserId,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<BuyRequest>, ApiError>> + Send + '_>> {
        // Single-buyer-per-device assumption: all stored requests belong to
        // the authenticated buyer
        Box::pin(async move {
            self.calls.buyer_list.fetch_add(1, Ordering::SeqCst);
            if let Some(error) = self.take_failure() {
                return Err(error);
            }

            Ok(lock_unpoisoned(&self.state).requests.clone())
        })
    }

    fn resolve(
        &self,
        request_id: RequestId,
        decision: Decision,
    ) -> Pin<Box<dyn Future<Output = Result<ResolutionReceipt, ApiError>> + Send + '_>> {
        Box::pin(async move {
            self.calls.resolve.fetch_add(1, Ordering::SeqCst);
            if let Some(error) = self.take_failure() {
                return Err(error);
            }

            let mut state = lock_unpoisoned(&self.state);
            let Some(request) = state.requests.iter_mut().find(|r| r.id == request_id) else {
                return Err(ApiError::NotFound);
            };

            if request.status.is_terminal() {
                return Err(ApiError::Status {
                    status: 409,
                    message: format!("Request {request_id} already {}", request.status),
                });
            }

            request.status = decision.resulting_status();
            Ok(ResolutionReceipt {
                request_id,
                status: request.status,
            })
        })
    }

    fn buyer_profile(
        &self,
        user_id: UserId,
    ) -> Pin<Box<dyn Future<Output = Result<BuyerProfile, ApiError>> + Send + '_>> {
        Box::pin(async move {
            self.calls.profile.fetch_add(1, Ordering::SeqCst);
            if let Some(error) = self.take_failure() {
                return Err(error);
            }

            lock_unpoisoned(&self.state)
                .profiles
                .get(&user_id)
                .cloned()
                .ok_or(ApiError::NotFound)
        })
    }

    fn list_books(
        &self,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<Book>, ApiError>> + Send + '_>> {
        Box::pin(async move {
            self.calls.books.fetch_add(1, Ordering::SeqCst);
            if let Some(error) = self.take_failure() {
                return Err(error);
            }

            Ok(lock_unpoisoned(&self.state).books.clone())
        })
    }
}
