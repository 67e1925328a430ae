//! # Bookstall Core
//!
//! Domain types and capability traits for the bookstall storefront client.
//!
//! The storefront lets peer users buy, resell, and rent (as e-books)
//! physical and digital books. This crate defines the vocabulary shared by
//! the REST client and the lifecycle component:
//!
//! - **Entities**: [`Book`], [`BuyRequest`], [`BuyerProfile`]
//! - **Lifecycle states**: [`RequestStatus`] (`pending → approved | denied`,
//!   terminal once resolved), [`Decision`], [`StatusProbe`]
//! - **Capabilities**: [`TokenProvider`] (bearer credential),
//!   [`RequestIdCache`] (per-book resume hint), [`StorefrontApi`] (backend
//!   operations)
//!
//! Capabilities are injected explicitly — there is no ambient storage or
//! hidden global in this crate. The backend is authoritative for all status
//! transitions; local state is limited to the request-id cache.

pub mod book;
pub mod cache;
pub mod credential;
pub mod ids;
pub mod request;
pub mod storefront;

pub use book::{Book, ServiceType};
pub use cache::{RequestIdCache, StoreError, cache_key};
pub use credential::{CredentialError, TokenProvider};
pub use ids::{BookId, RequestId, UserId};
pub use request::{BuyRequest, BuyerProfile, Decision, RequestStatus, StatusProbe};
pub use storefront::{
    ApiError, CreatedRequest, NewBuyRequest, ResolutionReceipt, StorefrontApi,
};
