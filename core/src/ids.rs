//! Identifier newtypes shared across the storefront client.
//!
//! The backend hands out numeric ids; wrapping them keeps a book id from
//! being passed where a request id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a book listing
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(i64);

impl BookId {
    /// Creates a new `BookId`
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the inner numeric value
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a buy request, assigned by the backend at creation
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(i64);

impl RequestId {
    /// Creates a new `RequestId`
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the inner numeric value
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a user (buyer or owner)
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Creates a new `UserId`
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the inner numeric value
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_display_as_plain_numbers() {
        assert_eq!(BookId::new(42).to_string(), "42");
        assert_eq!(RequestId::new(900).to_string(), "900");
        assert_eq!(UserId::new(7).to_string(), "7");
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn ids_serialize_transparently() {
        let json = serde_json::to_string(&RequestId::new(900)).unwrap();
        assert_eq!(json, "900");

        let back: RequestId = serde_json::from_str("900").unwrap();
        assert_eq!(back, RequestId::new(900));
    }
}
