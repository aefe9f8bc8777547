//! Product and variant types, as served by the catalog API.

use crate::ids::{ProductId, VariantId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A purchasable variant of a product (one size/color combination).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductVariant {
    /// Variant identifier.
    pub id: VariantId,
    /// Stock keeping unit (unique).
    pub sku: String,
    /// Size option, if the product varies by size.
    #[serde(default)]
    pub size: Option<String>,
    /// Color option, if the product varies by color.
    #[serde(default)]
    pub color: Option<String>,
    /// Unit price as a decimal string.
    pub price: String,
    /// Previous price shown struck through.
    #[serde(default)]
    pub compare_at_price: Option<String>,
    /// Units in stock.
    #[serde(default)]
    pub stock_quantity: i64,
    /// Whether the variant can be ordered.
    #[serde(default)]
    pub is_in_stock: bool,
    /// Whether stock is running low.
    #[serde(default)]
    pub is_low_stock: bool,
    /// Main image URL.
    #[serde(default)]
    pub image_main: Option<String>,
    /// Gallery images, in display order.
    #[serde(default)]
    pub images: Vec<ProductImage>,
}

/// A gallery image attached to a variant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductImage {
    #[serde(default)]
    pub id: Option<i64>,
    pub image_url: String,
    #[serde(default)]
    pub alt_text: Option<String>,
    #[serde(default)]
    pub position: i64,
}

impl ProductVariant {
    /// Parsed unit price; zero when the string is unusable.
    pub fn unit_price(&self) -> Money {
        Money::from_price(Some(&self.price))
    }

    /// Check if the variant is discounted against its compare-at price.
    pub fn is_on_sale(&self) -> bool {
        self.compare_at_price
            .as_deref()
            .and_then(Money::parse)
            .is_some_and(|compare| compare > self.unit_price())
    }

    /// Image shown for the variant: the main image, else the first gallery
    /// image.
    pub fn display_image(&self) -> Option<&str> {
        self.image_main
            .as_deref()
            .or_else(|| self.images.first().map(|img| img.image_url.as_str()))
    }

    /// Human-readable option label (e.g., "M / Noir").
    pub fn option_label(&self) -> Option<String> {
        let parts: Vec<&str> = [self.size.as_deref(), self.color.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty())
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" / "))
        }
    }
}

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    /// Product identifier.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// URL-friendly slug (unique).
    pub slug: String,
    /// Brand name.
    #[serde(default)]
    pub brand: Option<String>,
    /// Purchasable variants, in catalog order.
    #[serde(default)]
    pub variants: Vec<ProductVariant>,
}

impl Product {
    /// The variant preselected on the product page: the first one.
    pub fn default_variant(&self) -> Option<&ProductVariant> {
        self.variants.first()
    }

    /// Look up a variant by id.
    pub fn variant(&self, id: VariantId) -> Option<&ProductVariant> {
        self.variants.iter().find(|v| v.id == id)
    }

    /// Lowest variant price.
    pub fn min_price(&self) -> Option<Money> {
        self.variants.iter().map(ProductVariant::unit_price).min()
    }

    /// Check if any variant can be ordered.
    pub fn is_available(&self) -> bool {
        self.variants.iter().any(|v| v.is_in_stock)
    }
}
