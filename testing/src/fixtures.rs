//! Sample domain values shared across test suites.

use bookstall_core::{Book, BookId, BuyerProfile, ServiceType, UserId};

/// A complete buyer profile (`name: "A"`, `phone: "123"`, `address: "X"`)
#[must_use]
pub fn buyer_profile() -> BuyerProfile {
    BuyerProfile::new("A".to_string(), "123".to_string(), "X".to_string())
}

/// A resale listing owned by the given user
#[must_use]
pub fn resale_book(id: BookId, owner: UserId) -> Book {
    Book {
        id,
        title: "The Dispossessed".to_string(),
        author: "Ursula K. Le Guin".to_string(),
        genre: "Science Fiction".to_string(),
        description: "Lightly annotated".to_string(),
        owner_id: owner,
        service_type: ServiceType::Resale,
        price: Some(12.5),
        rental_price: None,
        rental_duration: None,
        cover_image: Some(format!("covers/{id}.jpg")),
        pdf: None,
    }
}

/// A rental listing owned by the given user
#[must_use]
pub fn rental_book(id: BookId, owner: UserId) -> Book {
    Book {
        id,
        title: "A Wizard of Earthsea".to_string(),
        author: "Ursula K. Le Guin".to_string(),
        genre: "Fantasy".to_string(),
        description: "E-book rental".to_string(),
        owner_id: owner,
        service_type: ServiceType::Rental,
        price: None,
        rental_price: Some(3.0),
        rental_duration: Some(14),
        cover_image: None,
        pdf: Some(format!("pdfs/{id}.pdf")),
    }
}
