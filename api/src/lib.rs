//! # Bookstall API
//!
//! REST client for the bookstall storefront backend.
//!
//! [`RestStorefrontApi`] implements the [`StorefrontApi`] trait from
//! `bookstall-core` over HTTP. Every authenticated call reads the current
//! bearer token from the injected `TokenProvider`, so a re-login on the
//! device is picked up without rebuilding the client.
//!
//! ## Example
//!
//! ```no_run
//! use bookstall_api::{ApiConfig, RestStorefrontApi};
//! use bookstall_core::{StorefrontApi, TokenProvider, CredentialError, UserId};
//! use std::sync::Arc;
//!
//! struct SessionToken(String);
//!
//! impl TokenProvider for SessionToken {
//!     fn bearer_token(&self) -> Result<String, CredentialError> {
//!         Ok(self.0.clone())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ApiConfig::from_env()?;
//!     let api = RestStorefrontApi::new(config, Arc::new(SessionToken("tok".into())));
//!
//!     let orders = api.buyer_requests(UserId::new(7)).await?;
//!     println!("{} orders", orders.len());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;

pub use client::RestStorefrontApi;
pub use config::{ApiConfig, ConfigError, BASE_URL_ENV};

// Re-export the trait so callers can use the client without naming core
pub use bookstall_core::StorefrontApi;
