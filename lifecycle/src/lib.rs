//! # Bookstall Lifecycle
//!
//! The buy-request lifecycle component of the bookstall storefront client.
//!
//! A buy request moves through a small, strictly monotonic state machine:
//!
//! | State | Entry | Transitions | Terminal |
//! |---|---|---|---|
//! | `pending` | creation succeeds | → `approved`, → `denied` | no |
//! | `approved` | owner approves a pending request | none | yes |
//! | `denied` | owner denies a pending request | none | yes |
//!
//! [`BuyRequestLifecycle`] drives this machine against an injected backend
//! ([`StorefrontApi`](bookstall_core::StorefrontApi)) and local cache
//! ([`RequestIdCache`](bookstall_core::RequestIdCache)). The backend is
//! authoritative; the cache only remembers which request id to ask about per
//! book, and stale entries are evicted on the next lookup.
//!
//! ## Example
//!
//! ```
//! use bookstall_lifecycle::BuyRequestLifecycle;
//! use bookstall_core::{BookId, StatusProbe, UserId};
//! use bookstall_testing::{fixtures, mocks};
//! use std::sync::Arc;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let storefront = Arc::new(mocks::InMemoryStorefront::new());
//! let cache = Arc::new(mocks::InMemoryRequestIdCache::new());
//! let lifecycle = BuyRequestLifecycle::new(storefront.clone(), cache);
//!
//! let book = fixtures::resale_book(BookId::new(42), UserId::new(7));
//! storefront.insert_book(book.clone());
//!
//! lifecycle.create_request(&book, &fixtures::buyer_profile()).await.unwrap();
//! let probe = lifecycle.status(book.id).await.unwrap();
//! assert!(matches!(probe, StatusProbe::Known(_)));
//! # }
//! ```

pub mod error;
pub mod lifecycle;

pub use error::LifecycleError;
pub use lifecycle::{BuyRequestLifecycle, RefreshSnapshot};
