//! HTTP-level tests of the REST client against a stubbed backend.

#![allow(clippy::unwrap_used, clippy::panic)]

use bookstall_api::{ApiConfig, RestStorefrontApi};
use bookstall_core::{
    ApiError, BookId, Decision, NewBuyRequest, RequestId, RequestStatus, StorefrontApi, UserId,
};
use bookstall_testing::fixtures;
use bookstall_testing::mocks::{NoTokenProvider, StaticTokenProvider};
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> RestStorefrontApi {
    RestStorefrontApi::new(
        ApiConfig::new(server.uri()),
        Arc::new(StaticTokenProvider::new("token-1")),
    )
}

#[tokio::test]
async fn create_request_posts_snapshot_with_bearer_token() {
    let server = MockServer::start().await;
    let payload = NewBuyRequest::for_book(BookId::new(42), &fixtures::buyer_profile());

    Mock::given(method("POST"))
        .and(path("/api/buy-requests"))
        .and(header("authorization", "Bearer token-1"))
        .and(body_json(json!({
            "book_id": 42,
            "buyer_name": "A",
            "buyer_phone": "123",
            "buyer_location": "X"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "ok",
            "buyRequestId": 900
        })))
        .expect(1)
        .mount(&server)
        .await;

    let created = client_for(&server).create_request(payload).await.unwrap();
    assert_eq!(created.buy_request_id, RequestId::new(900));
    assert_eq!(created.message, "ok");
}

#[tokio::test]
async fn check_status_decodes_the_reported_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/buy-requests/check-status/900"))
        .and(header("authorization", "Bearer token-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "pending" })))
        .mount(&server)
        .await;

    let status = client_for(&server)
        .check_status(RequestId::new(900))
        .await
        .unwrap();
    assert_eq!(status, RequestStatus::Pending);
}

#[tokio::test]
async fn check_status_maps_404_to_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/buy-requests/check-status/900"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let result = client_for(&server).check_status(RequestId::new(900)).await;
    assert!(matches!(result, Err(ApiError::NotFound)));
}

#[tokio::test]
async fn check_status_treats_missing_status_field_as_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/buy-requests/check-status/900"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let result = client_for(&server).check_status(RequestId::new(900)).await;
    assert!(matches!(result, Err(ApiError::NotFound)));
}

#[tokio::test]
async fn owner_requests_preserve_backend_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/buy-requests/owner"))
        .and(header("authorization", "Bearer token-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": 901,
                "book_id": 43,
                "title": "Second",
                "buyer_name": "B",
                "buyer_phone": "456",
                "buyer_location": "Y",
                "status": "pending"
            },
            {
                "id": 900,
                "book_id": 42,
                "title": "First",
                "buyer_name": "A",
                "buyer_phone": "123",
                "buyer_location": "X",
                "status": "approved"
            }
        ])))
        .mount(&server)
        .await;

    let requests = client_for(&server).owner_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].id, RequestId::new(901));
    assert_eq!(requests[1].status, RequestStatus::Approved);
}

#[tokio::test]
async fn buyer_requests_hit_the_per_user_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/buy-requests/buyer/3"))
        .and(header("authorization", "Bearer token-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": 900,
            "book_id": 42,
            "title": "First",
            "buyer_name": "A",
            "buyer_phone": "123",
            "buyer_location": "X",
            "status": "denied",
            "seller_name": "Owner",
            "seller_phone": "789",
            "seller_location": "Z",
            "price": 12.5,
            "service_type": "resale"
        }])))
        .mount(&server)
        .await;

    let orders = client_for(&server)
        .buyer_requests(UserId::new(3))
        .await
        .unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].seller_name.as_deref(), Some("Owner"));
    assert_eq!(orders[0].status, RequestStatus::Denied);
}

#[tokio::test]
async fn resolve_puts_the_decision_and_decodes_the_receipt() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/buy-requests/status"))
        .and(header("authorization", "Bearer token-1"))
        .and(body_json(json!({ "request_id": 900, "status": "approved" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "request_id": 900,
            "status": "approved"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let receipt = client_for(&server)
        .resolve(RequestId::new(900), Decision::Approved)
        .await
        .unwrap();
    assert_eq!(receipt.request_id, RequestId::new(900));
    assert_eq!(receipt.status, RequestStatus::Approved);
}

#[tokio::test]
async fn double_resolution_rejection_carries_the_backend_message() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/buy-requests/status"))
        .respond_with(ResponseTemplate::new(409).set_body_string("already resolved"))
        .mount(&server)
        .await;

    let result = client_for(&server)
        .resolve(RequestId::new(900), Decision::Denied)
        .await;
    match result {
        Err(ApiError::Status { status, message }) => {
            assert_eq!(status, 409);
            assert_eq!(message, "already resolved");
        },
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn rejected_token_maps_to_unauthorized() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/buy-requests/owner"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let result = client_for(&server).owner_requests().await;
    assert!(matches!(result, Err(ApiError::Unauthorized)));
}

#[tokio::test]
async fn buyer_profile_ignores_unknown_fields() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users/userDetails/3"))
        .and(header("authorization", "Bearer token-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "A",
            "phone": "123",
            "address": "X",
            "email": "a@example.com"
        })))
        .mount(&server)
        .await;

    let profile = client_for(&server)
        .buyer_profile(UserId::new(3))
        .await
        .unwrap();
    assert!(profile.missing_fields().is_empty());
    assert_eq!(profile.address, "X");
}

#[tokio::test]
async fn catalog_listing_needs_no_credential() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/books"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": 42,
            "title": "The Dispossessed",
            "author": "Ursula K. Le Guin",
            "genre": "Science Fiction",
            "description": "Lightly annotated",
            "owner_id": 7,
            "service_type": "resale",
            "price": 12.5
        }])))
        .mount(&server)
        .await;

    // A logged-out client can still browse the catalog
    let api = RestStorefrontApi::new(ApiConfig::new(server.uri()), Arc::new(NoTokenProvider));
    let books = api.list_books().await.unwrap();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].id, BookId::new(42));
}

#[tokio::test]
async fn unreachable_backend_is_a_transport_error() {
    // Nothing listens on the discard port
    let api = RestStorefrontApi::new(
        ApiConfig::new("http://127.0.0.1:9"),
        Arc::new(StaticTokenProvider::new("token-1")),
    );

    let result = api.owner_requests().await;
    assert!(matches!(result, Err(ApiError::Transport(_))));
}

#[tokio::test]
async fn authenticated_call_without_token_makes_no_request() {
    let server = MockServer::start().await;
    // No mocks mounted: any request reaching the server would 404 into
    // ApiError::NotFound rather than a credential error
    let api = RestStorefrontApi::new(ApiConfig::new(server.uri()), Arc::new(NoTokenProvider));

    let result = api.owner_requests().await;
    assert!(matches!(result, Err(ApiError::Credential(_))));
    assert!(server.received_requests().await.unwrap().is_empty());
}
