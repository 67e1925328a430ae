//! Book listings as served by the storefront catalog.
//!
//! Books are owned by the backend; the client only reads them. A listing is
//! either a one-time resale or a time-bounded e-book rental, and carries the
//! price fields matching its service type.

use crate::ids::{BookId, UserId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a book is offered to other users
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceType {
    /// One-time sale of the physical copy
    Resale,
    /// Time-bounded e-book access
    Rental,
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resale => write!(f, "resale"),
            Self::Rental => write!(f, "rental"),
        }
    }
}

/// A book listing, read-only from the client's perspective
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Book {
    /// Listing identifier
    pub id: BookId,
    /// Book title
    pub title: String,
    /// Author name
    pub author: String,
    /// Genre label
    pub genre: String,
    /// Free-form description
    pub description: String,
    /// User who listed the book
    pub owner_id: UserId,
    /// Resale or rental
    pub service_type: ServiceType,
    /// Sale price in the storefront currency (resale listings)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// Rental price (rental listings)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rental_price: Option<f64>,
    /// Rental duration in days (rental listings)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rental_duration: Option<u32>,
    /// Cover image reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    /// PDF reference (rental listings only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pdf: Option<String>,
}

impl Book {
    /// Whether this listing is a rental
    #[must_use]
    pub const fn is_rental(&self) -> bool {
        matches!(self.service_type, ServiceType::Rental)
    }

    /// Whether the given user listed this book
    #[must_use]
    pub fn owned_by(&self, user: UserId) -> bool {
        self.owner_id == user
    }
}
