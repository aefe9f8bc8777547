//! Order gateway: the seam to the backend's order-creation endpoint.

use std::time::Duration;

use async_trait::async_trait;

use crate::checkout::{CheckoutRequest, OrderConfirmation};
use crate::error::CommerceError;

/// Message shown when the backend gives no usable reason.
pub const GENERIC_CHECKOUT_FAILURE: &str = "Checkout failed. Please try again.";

/// Places orders with the backend.
///
/// The backend is the authority on prices, stock and variant existence; a
/// rejection comes back as [`CommerceError::CheckoutRejected`].
#[async_trait]
pub trait OrderGateway: Send + Sync {
    /// Submit an order and return its confirmation.
    async fn create_order(
        &self,
        request: &CheckoutRequest,
    ) -> Result<OrderConfirmation, CommerceError>;
}

/// [`OrderGateway`] over the storefront REST API.
#[derive(Debug, Clone)]
pub struct HttpOrderGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpOrderGateway {
    /// Create a gateway for an API base such as `http://localhost:8000/api/v1`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Create a gateway with a request timeout.
    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, CommerceError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// URL the order is posted to.
    pub fn checkout_url(&self) -> String {
        format!("{}/checkout/", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl OrderGateway for HttpOrderGateway {
    async fn create_order(
        &self,
        request: &CheckoutRequest,
    ) -> Result<OrderConfirmation, CommerceError> {
        let url = self.checkout_url();
        tracing::debug!(%url, items = request.items.len(), "submitting order");

        let response = self.client.post(&url).json(request).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            return Err(CommerceError::CheckoutRejected {
                status: status.as_u16(),
                message: rejection_message(&body),
            });
        }

        let order: OrderConfirmation = serde_json::from_slice(&body)?;
        Ok(order)
    }
}

/// Pull a readable reason out of an error body.
///
/// The API reports failures as `{"error": "..."}` or `{"detail": "..."}`;
/// anything else maps to [`GENERIC_CHECKOUT_FAILURE`].
pub fn rejection_message(body: &[u8]) -> String {
    serde_json::from_slice::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            ["error", "detail"]
                .iter()
                .find_map(|key| v.get(*key).and_then(|m| m.as_str()).map(String::from))
        })
        .unwrap_or_else(|| GENERIC_CHECKOUT_FAILURE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkout_url() {
        let gateway = HttpOrderGateway::new("http://localhost:8000/api/v1/");
        assert_eq!(
            gateway.checkout_url(),
            "http://localhost:8000/api/v1/checkout/"
        );

        let gateway = HttpOrderGateway::new("http://backend:8000/api/v1");
        assert_eq!(gateway.checkout_url(), "http://backend:8000/api/v1/checkout/");
    }

    #[test]
    fn test_rejection_message_prefers_error() {
        let body = br#"{"error": "Insufficient stock for R-1. Available: 1", "detail": "x"}"#;
        assert_eq!(
            rejection_message(body),
            "Insufficient stock for R-1. Available: 1"
        );
    }

    #[test]
    fn test_rejection_message_detail() {
        assert_eq!(rejection_message(br#"{"detail": "Not found."}"#), "Not found.");
    }

    #[test]
    fn test_rejection_message_fallback() {
        assert_eq!(rejection_message(b"<html>502</html>"), GENERIC_CHECKOUT_FAILURE);
        assert_eq!(
            rejection_message(br#"{"items": ["Cart cannot be empty."]}"#),
            GENERIC_CHECKOUT_FAILURE
        );
    }
}
