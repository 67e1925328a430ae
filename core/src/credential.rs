//! Credential capability.
//!
//! The backend authenticates every call with a bearer token. Rather than
//! reading the token from ambient storage inside each operation, the client
//! takes a [`TokenProvider`] as an explicit dependency, so tests can inject a
//! fixed token and production code can plug in whatever session store the
//! host app uses.

use thiserror::Error;

/// Errors raised by a credential lookup
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CredentialError {
    /// No credential is currently held (user is not logged in)
    #[error("Not authenticated: no bearer token available")]
    Unauthenticated,
}

/// Source of the current bearer token
///
/// Implementations must be cheap to call: every API request reads the token
/// fresh, so a re-login is picked up without rebuilding the client.
pub trait TokenProvider: Send + Sync {
    /// Returns the current bearer token
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError::Unauthenticated`] when no token is held.
    fn bearer_token(&self) -> Result<String, CredentialError>;
}
