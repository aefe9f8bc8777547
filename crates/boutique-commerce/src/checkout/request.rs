//! Checkout request payload.

use crate::cart::Cart;
use crate::error::CommerceError;
use crate::ids::{BaladiyaId, VariantId, WilayaId};
use serde::{Deserialize, Serialize};

/// Longest name the backend accepts.
pub const MAX_NAME_LEN: usize = 200;
/// Longest phone number the backend accepts.
pub const MAX_PHONE_LEN: usize = 20;

/// One line of the order, as re-submitted for server-side pricing and stock.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckoutItem {
    /// Variant ordered.
    pub variant_id: VariantId,
    /// Quantity ordered.
    pub quantity: u32,
}

/// Guest customer and delivery details.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CustomerDetails {
    /// Full name.
    pub name: String,
    /// Phone number.
    pub phone: String,
    /// Street address.
    pub address: String,
    /// Province.
    pub wilaya: WilayaId,
    /// Municipality within the province.
    pub baladiya: BaladiyaId,
}

impl CustomerDetails {
    /// Check the fields the backend would otherwise reject.
    pub fn validate(&self) -> Result<(), CommerceError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(CommerceError::ValidationError("name is required".into()));
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(CommerceError::ValidationError(format!(
                "name must be at most {} characters",
                MAX_NAME_LEN
            )));
        }

        let phone = self.phone.trim();
        if phone.is_empty() {
            return Err(CommerceError::ValidationError("phone is required".into()));
        }
        if phone.chars().count() > MAX_PHONE_LEN {
            return Err(CommerceError::ValidationError(format!(
                "phone must be at most {} characters",
                MAX_PHONE_LEN
            )));
        }

        if self.address.trim().is_empty() {
            return Err(CommerceError::ValidationError("address is required".into()));
        }

        Ok(())
    }
}

/// Body of `POST /checkout/`.
///
/// Serializes flat: `{items, name, phone, address, wilaya, baladiya}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckoutRequest {
    /// Ordered variants and quantities.
    pub items: Vec<CheckoutItem>,
    /// Customer details.
    #[serde(flatten)]
    pub customer: CustomerDetails,
}

impl CheckoutRequest {
    /// Build and validate a request from the cart.
    pub fn from_cart(cart: &Cart, customer: CustomerDetails) -> Result<Self, CommerceError> {
        if cart.is_empty() {
            return Err(CommerceError::EmptyCart);
        }
        customer.validate()?;

        Ok(Self {
            items: cart.checkout_items(),
            customer,
        })
    }
}

#[cfg(test)]
pub(crate) fn sample_customer() -> CustomerDetails {
    CustomerDetails {
        name: "Amina Benali".to_string(),
        phone: "0555 12 34 56".to_string(),
        address: "12 rue Didouche Mourad".to_string(),
        wilaya: WilayaId::new(16),
        baladiya: BaladiyaId::new(1601),
    }
}
