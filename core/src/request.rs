//! Buy requests and their lifecycle states.
//!
//! A buy request tracks one buyer's interest in one book. It is created in
//! `pending` and moves exactly once to `approved` or `denied`; both are
//! terminal. The backend is the source of truth for every transition — the
//! client never mutates status locally.

use crate::ids::{BookId, RequestId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of a buy request in its lifecycle
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    /// Awaiting the owner's decision
    Pending,
    /// Owner accepted the request
    Approved,
    /// Owner declined the request
    Denied,
}

impl RequestStatus {
    /// Whether this status admits no further transitions
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Approved | Self::Denied)
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Approved => write!(f, "approved"),
            Self::Denied => write!(f, "denied"),
        }
    }
}

/// The owner's resolution of a pending request
///
/// Distinct from [`RequestStatus`] so that `pending` can never be submitted
/// as a decision.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    /// Accept the request
    Approved,
    /// Decline the request
    Denied,
}

impl Decision {
    /// The status a pending request ends up in after this decision
    #[must_use]
    pub const fn resulting_status(self) -> RequestStatus {
        match self {
            Self::Approved => RequestStatus::Approved,
            Self::Denied => RequestStatus::Denied,
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Approved => write!(f, "approved"),
            Self::Denied => write!(f, "denied"),
        }
    }
}

/// Result of a status lookup for a book
///
/// `None` means no active request is known for the book. `Unknown` means the
/// lookup could not be completed (network/timeout) — deliberately distinct so
/// callers never show "no request found" when the truth is "could not tell".
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StatusProbe {
    /// No active request known for this book
    None,
    /// The backend confirmed the request and reported its status
    Known(RequestStatus),
    /// Transient failure; status could not be determined
    Unknown,
}

/// Buyer contact details attached to a request at creation time
///
/// These are snapshotted into the request: later profile edits do not
/// retroactively change a submitted request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuyerProfile {
    /// Display name
    pub name: String,
    /// Contact phone number
    pub phone: String,
    /// Delivery / meeting address
    pub address: String,
}

impl BuyerProfile {
    /// Creates a profile from its three contact fields
    #[must_use]
    pub const fn new(name: String, phone: String, address: String) -> Self {
        Self { name, phone, address }
    }

    /// Returns the names of the fields that are empty or whitespace-only
    ///
    /// An empty result means the profile is complete enough to submit.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.phone.trim().is_empty() {
            missing.push("phone");
        }
        if self.address.trim().is_empty() {
            missing.push("address");
        }
        missing
    }
}

/// A buy request as reported by the backend
///
/// `buyer_*` fields are the snapshot taken at creation. The `seller_*`,
/// price, and service-type fields are only populated on buyer-facing lists,
/// where the backend joins in the counterparty's details.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BuyRequest {
    /// Request identifier
    pub id: RequestId,
    /// Book being requested
    pub book_id: BookId,
    /// Book title, denormalized for display
    pub title: String,
    /// Buyer name at request time
    pub buyer_name: String,
    /// Buyer phone at request time
    pub buyer_phone: String,
    /// Buyer address at request time
    pub buyer_location: String,
    /// Current lifecycle status
    pub status: RequestStatus,
    /// Seller name (buyer-facing lists only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seller_name: Option<String>,
    /// Seller phone (buyer-facing lists only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seller_phone: Option<String>,
    /// Seller address (buyer-facing lists only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seller_location: Option<String>,
    /// Resale price of the requested book, when applicable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// Rental price of the requested book, when applicable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rental_price: Option<f64>,
    /// Service type of the requested book
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_type: Option<crate::book::ServiceType>,
}

impl BuyRequest {
    /// Whether the request is still awaiting a decision
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self.status, RequestStatus::Pending)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn status_terminality() {
        assert!(!RequestStatus::Pending.is_terminal());
        assert!(RequestStatus::Approved.is_terminal());
        assert!(RequestStatus::Denied.is_terminal());
    }

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&RequestStatus::Pending).unwrap(), "\"pending\"");
        let back: RequestStatus = serde_json::from_str("\"denied\"").unwrap();
        assert_eq!(back, RequestStatus::Denied);
    }

    #[test]
    fn decision_maps_to_terminal_status() {
        assert_eq!(Decision::Approved.resulting_status(), RequestStatus::Approved);
        assert_eq!(Decision::Denied.resulting_status(), RequestStatus::Denied);
        assert!(Decision::Approved.resulting_status().is_terminal());
    }

    #[test]
    fn complete_profile_has_no_missing_fields() {
        let profile = BuyerProfile::new("A".to_string(), "123".to_string(), "X".to_string());
        assert!(profile.missing_fields().is_empty());
    }

    #[test]
    fn missing_phone_is_reported() {
        let profile = BuyerProfile::new("A".to_string(), "  ".to_string(), "X".to_string());
        assert_eq!(profile.missing_fields(), vec!["phone"]);
    }

    #[test]
    fn owner_list_entry_deserializes_without_seller_fields() {
        let json = r#"{
            "id": 900,
            "book_id": 42,
            "title": "The Dispossessed",
            "buyer_name": "A",
            "buyer_phone": "123",
            "buyer_location": "X",
            "status": "pending"
        }"#;
        let request: BuyRequest = serde_json::from_str(json).unwrap();
        assert!(request.is_pending());
        assert_eq!(request.seller_name, None);
    }
}
