//! Checkout module.
//!
//! Contains the checkout request, the order confirmation, the gateway to the
//! order endpoint, and the submit-then-clear flow.

mod flow;
mod gateway;
mod order;
mod request;

pub use flow::place_order;
pub use gateway::{rejection_message, HttpOrderGateway, OrderGateway, GENERIC_CHECKOUT_FAILURE};
pub use order::{OrderConfirmation, OrderLine};
pub use request::{CheckoutItem, CheckoutRequest, CustomerDetails, MAX_NAME_LEN, MAX_PHONE_LEN};
