//! # Bookstall Testing
//!
//! Mock capabilities and fixtures for testing the bookstall client.
//!
//! This crate provides:
//! - In-memory implementations of the `bookstall-core` capability traits
//! - An [`InMemoryStorefront`] backend stand-in with per-operation call
//!   counters and one-shot failure injection
//! - Fixture builders for books and profiles
//!
//! ## Example
//!
//! ```
//! use bookstall_testing::mocks::{InMemoryRequestIdCache, InMemoryStorefront};
//! use bookstall_core::{BookId, NewBuyRequest, StorefrontApi};
//! use bookstall_testing::fixtures;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let storefront = InMemoryStorefront::new();
//! let payload = NewBuyRequest::for_book(BookId::new(42), &fixtures::buyer_profile());
//! let created = storefront.create_request(payload).await.unwrap();
//! assert_eq!(created.message, "Buy request sent");
//! # }
//! ```

pub mod fixtures;
pub mod mocks;

pub use mocks::{
    CallCounts, InMemoryRequestIdCache, InMemoryStorefront, NoTokenProvider, StaticTokenProvider,
};
