//! End-to-end lifecycle flow against the in-memory storefront.
//!
//! Walks the whole buyer/owner exchange through the public API: the buyer
//! requests a book, the owner sees and approves it, and the buyer's status
//! view follows the backend through the terminal state.

#![allow(clippy::unwrap_used)]

use bookstall_core::{
    BookId, Decision, RequestId, RequestIdCache, RequestStatus, StatusProbe, StorefrontApi, UserId,
};
use bookstall_lifecycle::BuyRequestLifecycle;
use bookstall_testing::fixtures;
use bookstall_testing::mocks::{InMemoryRequestIdCache, InMemoryStorefront};
use std::sync::Arc;

#[tokio::test]
async fn buyer_requests_owner_approves() {
    let storefront = Arc::new(InMemoryStorefront::new());
    let cache = Arc::new(InMemoryRequestIdCache::new());
    let lifecycle = BuyRequestLifecycle::new(
        Arc::clone(&storefront) as Arc<dyn StorefrontApi>,
        Arc::clone(&cache) as Arc<dyn RequestIdCache>,
    );

    let owner = UserId::new(7);
    let buyer = UserId::new(3);
    let book = fixtures::resale_book(BookId::new(42), owner);
    storefront.insert_book(book.clone());

    // Buyer presses "Buy"
    let request_id = lifecycle
        .create_request(&book, &fixtures::buyer_profile())
        .await
        .unwrap();
    assert_eq!(request_id, RequestId::new(900));
    assert_eq!(cache.get(book.id).await.unwrap(), Some(request_id));

    // Buyer's detail view polls the status
    assert_eq!(
        lifecycle.status(book.id).await.unwrap(),
        StatusProbe::Known(RequestStatus::Pending)
    );

    // Owner's notifications tab shows the request with the contact snapshot
    let pending = lifecycle.list_pending_for_owner().await.unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].id, request_id);
    assert_eq!(pending[0].title, book.title);
    assert_eq!(pending[0].buyer_phone, "123");

    // Owner approves
    let receipt = lifecycle
        .resolve(request_id, Decision::Approved)
        .await
        .unwrap();
    assert_eq!(receipt.status, RequestStatus::Approved);

    // The pending queue empties; the buyer's views see the terminal state
    assert!(lifecycle.list_pending_for_owner().await.unwrap().is_empty());
    assert_eq!(
        lifecycle.status(book.id).await.unwrap(),
        StatusProbe::Known(RequestStatus::Approved)
    );
    let orders = lifecycle.list_mine(buyer).await.unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].status, RequestStatus::Approved);
}

#[tokio::test]
async fn restart_resumes_tracking_from_the_cache() {
    let storefront = Arc::new(InMemoryStorefront::new());
    let cache = Arc::new(InMemoryRequestIdCache::new());

    let book = fixtures::resale_book(BookId::new(42), UserId::new(7));
    storefront.insert_book(book.clone());

    {
        let lifecycle = BuyRequestLifecycle::new(
            Arc::clone(&storefront) as Arc<dyn StorefrontApi>,
            Arc::clone(&cache) as Arc<dyn RequestIdCache>,
        );
        lifecycle
            .create_request(&book, &fixtures::buyer_profile())
            .await
            .unwrap();
    }

    // A fresh component over the same persisted cache picks the request up
    let restarted = BuyRequestLifecycle::new(
        Arc::clone(&storefront) as Arc<dyn StorefrontApi>,
        Arc::clone(&cache) as Arc<dyn RequestIdCache>,
    );
    assert_eq!(
        restarted.status(book.id).await.unwrap(),
        StatusProbe::Known(RequestStatus::Pending)
    );
}
