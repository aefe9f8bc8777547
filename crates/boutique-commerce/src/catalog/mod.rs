//! Product catalog module.
//!
//! Contains the product/variant types, the variant picker and quantity
//! selector behind the product page, and the checks run before a selection
//! goes into the cart.

mod picker;
mod product;
mod quantity;

pub use picker::{
    color_available, distinct_colors, distinct_sizes, select_color, select_size, size_available,
};
pub use product::{Product, ProductImage, ProductVariant};
pub use quantity::QuantitySelector;

use crate::cart::CartLine;
use crate::error::CommerceError;

/// Build the cart line for adding `quantity` of `variant` to the cart.
///
/// Refuses out-of-stock variants and quantities above the variant's stock.
/// The image snapshot is the variant's main image, else its first gallery
/// image, else the product's first variant image.
pub fn cart_line_for(
    product: &Product,
    variant: Option<&ProductVariant>,
    quantity: i64,
) -> Result<CartLine, CommerceError> {
    let variant = variant.ok_or(CommerceError::NoVariantSelected)?;

    let count = u32::try_from(quantity)
        .ok()
        .filter(|q| *q >= 1)
        .ok_or(CommerceError::InvalidQuantity(quantity))?;

    if variant.stock_quantity < quantity {
        return Err(CommerceError::InsufficientStock {
            sku: variant.sku.clone(),
            requested: quantity,
            available: variant.stock_quantity,
        });
    }
    if !variant.is_in_stock {
        return Err(CommerceError::OutOfStock {
            sku: variant.sku.clone(),
        });
    }

    let mut line = CartLine::new(variant.id, count)
        .with_sku(variant.sku.clone())
        .with_title(product.title.clone())
        .with_price(variant.price.clone());

    let image = variant.display_image().or_else(|| {
        product
            .default_variant()
            .and_then(|v| v.image_main.as_deref())
    });
    if let Some(image) = image {
        line = line.with_image(image);
    }

    Ok(line)
}
