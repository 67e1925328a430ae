//! REST implementation of the storefront API.

use crate::config::ApiConfig;
use bookstall_core::{
    ApiError, Book, BuyRequest, BuyerProfile, CreatedRequest, Decision, NewBuyRequest, RequestId,
    RequestStatus, ResolutionReceipt, StorefrontApi, TokenProvider, UserId,
};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Response envelope of the check-status endpoint
///
/// The backend may answer 200 with no `status` field for a request it has
/// already cleaned up; that case is reported as [`ApiError::NotFound`], same
/// as an actual 404.
#[derive(Debug, Deserialize)]
struct StatusEnvelope {
    status: Option<RequestStatus>,
}

/// Resolution payload sent to the backend
#[derive(Debug, serde::Serialize)]
struct ResolutionBody {
    request_id: RequestId,
    status: Decision,
}

/// HTTP client for the storefront backend
///
/// Wraps a [`reqwest::Client`] and attaches the current bearer token, read
/// fresh from the injected [`TokenProvider`] on every call.
#[derive(Clone)]
pub struct RestStorefrontApi {
    http: Client,
    config: ApiConfig,
    tokens: Arc<dyn TokenProvider>,
}

impl RestStorefrontApi {
    /// Creates a client against the configured backend
    #[must_use]
    pub fn new(config: ApiConfig, tokens: Arc<dyn TokenProvider>) -> Self {
        Self {
            http: Client::new(),
            config,
            tokens,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.config.base_url())
    }

    fn authorized(&self, builder: RequestBuilder) -> Result<RequestBuilder, ApiError> {
        let token = self.tokens.bearer_token()?;
        Ok(builder.bearer_auth(token))
    }

    async fn send(builder: RequestBuilder) -> Result<Response, ApiError> {
        builder
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        match response.status() {
            status if status.is_success() => response
                .json::<T>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string())),
            StatusCode::UNAUTHORIZED => Err(ApiError::Unauthorized),
            StatusCode::NOT_FOUND => Err(ApiError::NotFound),
            status => {
                let message = response.text().await.unwrap_or_default();
                Err(ApiError::Status {
                    status: status.as_u16(),
                    message,
                })
            },
        }
    }

    async fn create_request_inner(
        &self,
        payload: NewBuyRequest,
    ) -> Result<CreatedRequest, ApiError> {
        tracing::debug!(book_id = %payload.book_id, "Submitting buy request");
        let builder = self
            .authorized(self.http.post(self.url("/api/buy-requests")))?
            .json(&payload);
        let response = Self::send(builder).await?;
        Self::decode(response).await
    }

    async fn check_status_inner(&self, request_id: RequestId) -> Result<RequestStatus, ApiError> {
        let builder = self.authorized(
            self.http
                .get(self.url(&format!("/api/buy-requests/check-status/{request_id}"))),
        )?;
        let response = Self::send(builder).await?;
        let envelope: StatusEnvelope = Self::decode(response).await?;
        // A 200 without a status field means the backend dropped the request
        envelope.status.ok_or(ApiError::NotFound)
    }

    async fn owner_requests_inner(&self) -> Result<Vec<BuyRequest>, ApiError> {
        let builder = self.authorized(self.http.get(self.url("/api/buy-requests/owner")))?;
        let response = Self::send(builder).await?;
        Self::decode(response).await
    }

    async fn buyer_requests_inner(&self, buyer_id: UserId) -> Result<Vec<BuyRequest>, ApiError> {
        let builder = self.authorized(
            self.http
                .get(self.url(&format!("/api/buy-requests/buyer/{buyer_id}"))),
        )?;
        let response = Self::send(builder).await?;
        Self::decode(response).await
    }

    async fn resolve_inner(
        &self,
        request_id: RequestId,
        decision: Decision,
    ) -> Result<ResolutionReceipt, ApiError> {
        tracing::debug!(%request_id, %decision, "Resolving buy request");
        let body = ResolutionBody {
            request_id,
            status: decision,
        };
        let builder = self
            .authorized(self.http.put(self.url("/api/buy-requests/status")))?
            .json(&body);
        let response = Self::send(builder).await?;
        Self::decode(response).await
    }

    async fn buyer_profile_inner(&self, user_id: UserId) -> Result<BuyerProfile, ApiError> {
        let builder = self.authorized(
            self.http
                .get(self.url(&format!("/api/users/userDetails/{user_id}"))),
        )?;
        let response = Self::send(builder).await?;
        Self::decode(response).await
    }

    async fn list_books_inner(&self) -> Result<Vec<Book>, ApiError> {
        // The catalog is public; no bearer token is attached
        let response = Self::send(self.http.get(self.url("/api/books"))).await?;
        Self::decode(response).await
    }
}

impl StorefrontApi for RestStorefrontApi {
    fn create_request(
        &self,
        payload: NewBuyRequest,
    ) -> Pin<Box<dyn Future<Output = Result<CreatedRequest, ApiError>> + Send + '_>> {
        Box::pin(self.create_request_inner(payload))
    }

    fn check_status(
        &self,
        request_id: RequestId,
    ) -> Pin<Box<dyn Future<Output = Result<RequestStatus, ApiError>> + Send + '_>> {
        Box::pin(self.check_status_inner(request_id))
    }

    fn owner_requests(
        &self,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<BuyRequest>, ApiError>> + Send + '_>> {
        Box::pin(self.owner_requests_inner())
    }

    fn buyer_requests(
        &self,
        buyer_id: UserId,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<BuyRequest>, ApiError>> + Send + '_>> {
        Box::pin(self.buyer_requests_inner(buyer_id))
    }

    fn resolve(
        &self,
        request_id: RequestId,
        decision: Decision,
    ) -> Pin<Box<dyn Future<Output = Result<ResolutionReceipt, ApiError>> + Send + '_>> {
        Box::pin(self.resolve_inner(request_id, decision))
    }

    fn buyer_profile(
        &self,
        user_id: UserId,
    ) -> Pin<Box<dyn Future<Output = Result<BuyerProfile, ApiError>> + Send + '_>> {
        Box::pin(self.buyer_profile_inner(user_id))
    }

    fn list_books(
        &self,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<Book>, ApiError>> + Send + '_>> {
        Box::pin(self.list_books_inner())
    }
}
