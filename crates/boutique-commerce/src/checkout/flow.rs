//! Guest checkout: submit the cart, then clear it.

use crate::cart::{CartPersistence, CartStore};
use crate::checkout::{CheckoutRequest, CustomerDetails, OrderConfirmation, OrderGateway};
use crate::error::CommerceError;

/// Place an order for the current cart.
///
/// Builds the request from the cart (only `variant_id`/`quantity` pairs go
/// out), submits it, and clears the cart once the backend confirms. On any
/// error the cart is left exactly as it was so the customer can retry.
pub async fn place_order<P, G>(
    store: &mut CartStore<P>,
    gateway: &G,
    customer: CustomerDetails,
) -> Result<OrderConfirmation, CommerceError>
where
    P: CartPersistence,
    G: OrderGateway + ?Sized,
{
    let request = CheckoutRequest::from_cart(store.cart(), customer)?;

    match gateway.create_order(&request).await {
        Ok(order) => {
            tracing::info!(reference = %order.reference, items = request.items.len(), "order placed");
            store.clear_cart();
            Ok(order)
        }
        Err(e) => {
            tracing::warn!(error = %e, "checkout failed, cart kept");
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::{CartLine, NoopPersistence};
    use crate::checkout::request::sample_customer;
    use crate::ids::VariantId;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Records requests and answers with a canned result.
    struct Recorder {
        requests: Mutex<Vec<CheckoutRequest>>,
        reject_with: Option<(u16, String)>,
    }

    impl Recorder {
        fn accepting() -> Self {
            Self {
                requests: Mutex::new(Vec::new()),
                reject_with: None,
            }
        }

        fn rejecting(status: u16, message: &str) -> Self {
            Self {
                requests: Mutex::new(Vec::new()),
                reject_with: Some((status, message.to_string())),
            }
        }
    }

    #[async_trait]
    impl OrderGateway for Recorder {
        async fn create_order(
            &self,
            request: &CheckoutRequest,
        ) -> Result<OrderConfirmation, CommerceError> {
            self.requests.lock().unwrap().push(request.clone());
            match &self.reject_with {
                Some((status, message)) => Err(CommerceError::CheckoutRejected {
                    status: *status,
                    message: message.clone(),
                }),
                None => Ok(serde_json::from_str(r#"{"reference": "ORD-42"}"#).unwrap()),
            }
        }
    }

    fn filled_store() -> CartStore<NoopPersistence> {
        let mut store = CartStore::open(NoopPersistence);
        store.add_item(CartLine::new(VariantId::new(1), 2).with_price("10.00").with_title("Robe"));
        store.add_item(CartLine::new(VariantId::new(2), 1).with_price("5.00"));
        store
    }

    #[tokio::test]
    async fn test_success_clears_cart() {
        let mut store = filled_store();
        let gateway = Recorder::accepting();

        let order = place_order(&mut store, &gateway, sample_customer())
            .await
            .unwrap();

        assert_eq!(order.reference, "ORD-42");
        assert!(store.cart().is_empty());

        let requests = gateway.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].items.len(), 2);
        assert_eq!(requests[0].items[0].quantity, 2);
    }

    #[tokio::test]
    async fn test_rejection_keeps_cart() {
        let mut store = filled_store();
        let before = store.snapshot();
        let gateway = Recorder::rejecting(400, "Insufficient stock for R-1. Available: 1");

        let err = place_order(&mut store, &gateway, sample_customer())
            .await
            .unwrap_err();

        assert!(matches!(err, CommerceError::CheckoutRejected { status: 400, .. }));
        assert_eq!(store.cart(), &*before);
    }

    #[tokio::test]
    async fn test_empty_cart_never_submits() {
        let mut store = CartStore::open(NoopPersistence);
        let gateway = Recorder::accepting();

        let err = place_order(&mut store, &gateway, sample_customer())
            .await
            .unwrap_err();

        assert!(matches!(err, CommerceError::EmptyCart));
        assert!(gateway.requests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_customer_never_submits() {
        let mut store = filled_store();
        let gateway = Recorder::accepting();
        let mut customer = sample_customer();
        customer.phone = String::new();

        let err = place_order(&mut store, &gateway, customer).await.unwrap_err();

        assert!(matches!(err, CommerceError::ValidationError(_)));
        assert!(gateway.requests.lock().unwrap().is_empty());
        assert_eq!(store.total_items(), 3);
    }
}
