//! Cart commands.

use anyhow::{bail, Context as _, Result};
use boutique_commerce::cart::{Cart, CartLine};
use boutique_commerce::catalog::{
    cart_line_for, color_available, distinct_colors, distinct_sizes, select_color, select_size,
    size_available, Product, ProductVariant, QuantitySelector,
};
use boutique_commerce::{Money, VariantId};
use dialoguer::Confirm;

use super::{CartArgs, CartCommand};
use crate::context::Context;

/// Run the cart command.
pub async fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let profile = args.profile.as_deref();
    let mut store = ctx.open_cart(profile)?;

    match args.command.unwrap_or(CartCommand::Show) {
        CartCommand::Show => {}
        CartCommand::Add {
            variant_id,
            quantity,
            sku,
            title,
            price,
            image,
        } => {
            if quantity == 0 {
                bail!("Quantity must be at least 1");
            }
            let mut line = CartLine::new(VariantId::new(variant_id), quantity);
            line.sku = sku;
            line.title = title;
            line.price = price;
            line.image = image;

            store.add_item(line);
            ctx.output
                .success(&format!("Added {} x variant {}", quantity, variant_id));
        }
        CartCommand::AddProduct {
            file,
            size,
            color,
            quantity,
        } => {
            let product = load_product(&file)?;
            let line = pick_line(&product, size.as_deref(), color.as_deref(), &quantity, ctx)?;
            let added = line.quantity;
            let label = line.sku.clone().unwrap_or_else(|| line.variant_id.to_string());

            store.add_item(line);
            ctx.output
                .success(&format!("Added {} x {} ({})", added, product.title, label));
        }
        CartCommand::Remove { variant_id } => {
            let id = VariantId::new(variant_id);
            if store.cart().line(id).is_none() {
                ctx.output
                    .warn(&format!("Variant {} is not in the cart", variant_id));
            } else {
                store.remove_item(id);
                ctx.output.success(&format!("Removed variant {}", variant_id));
            }
        }
        CartCommand::Update {
            variant_id,
            quantity,
        } => {
            let id = VariantId::new(variant_id);
            if store.cart().line(id).is_none() {
                ctx.output
                    .warn(&format!("Variant {} is not in the cart", variant_id));
            } else {
                store.update_quantity(id, quantity);
                if quantity <= 0 {
                    ctx.output.success(&format!("Removed variant {}", variant_id));
                } else {
                    ctx.output
                        .success(&format!("Variant {} quantity set to {}", variant_id, quantity));
                }
            }
        }
        CartCommand::Clear { yes } => {
            if store.cart().is_empty() {
                ctx.output.info("Cart is already empty");
                return Ok(());
            }

            if !yes && !ctx.output.is_json() {
                let confirmed = Confirm::new()
                    .with_prompt(format!("Remove all {} items from the cart?", store.total_items()))
                    .default(false)
                    .interact()?;

                if !confirmed {
                    ctx.output.warn("Clear cancelled");
                    return Ok(());
                }
            }

            store.clear_cart();
            ctx.output.success("Cart cleared");
        }
    }

    show_cart(store.cart(), ctx);
    Ok(())
}

/// Print the cart lines and totals.
pub fn show_cart(cart: &Cart, ctx: &Context) {
    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "items": cart.lines(),
            "total_items": cart.total_items(),
            "total_price": cart.total_price().display_amount(),
        }));
        return;
    }

    ctx.output.header("Cart");

    if cart.is_empty() {
        ctx.output.info("Your cart is empty");
        return;
    }

    let rows: Vec<Vec<String>> = cart
        .lines()
        .iter()
        .map(|line| {
            let title = line.title.as_deref().or(line.sku.as_deref()).unwrap_or("-");
            vec![
                line.variant_id.to_string(),
                title.to_string(),
                line.quantity.to_string(),
                price_cell(line),
                line.line_total().display(),
            ]
        })
        .collect();
    ctx.output
        .table(&["VARIANT", "ITEM", "QTY", "PRICE", "SUBTOTAL"], &rows);

    println!();
    ctx.output.kv("Items", &cart.total_items().to_string());
    ctx.output.kv("Total", &cart.total_price().display());
}

/// Unit price column; an unusable price snapshot shows as "-".
fn price_cell(line: &CartLine) -> String {
    let price = line.unit_price();
    if price.is_zero() {
        "-".to_string()
    } else {
        price.display()
    }
}

/// Price notes shown for the selected variant.
fn selection_notes(product: &Product, variant: &ProductVariant) -> Vec<String> {
    let mut notes = Vec::new();

    if variant.is_on_sale() {
        if let Some(was) = variant.compare_at_price.as_deref().and_then(Money::parse) {
            notes.push(format!("On sale: {} (was {})", variant.unit_price(), was));
        }
    }

    if let Some(min) = product.min_price() {
        if min < variant.unit_price() {
            notes.push(format!("Other options from {}", min));
        }
    }

    notes
}

fn load_product(path: &str) -> Result<Product> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read product file: {}", path))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse product file: {}", path))
}

/// Walk the product page selection: preselect the first variant, apply the
/// size and color clicks, then clamp the typed quantity to the stock.
fn pick_line(
    product: &Product,
    size: Option<&str>,
    color: Option<&str>,
    quantity: &str,
    ctx: &Context,
) -> Result<CartLine> {
    if !product.is_available() {
        bail!("{} is sold out", product.title);
    }

    let variants = &product.variants;
    let mut selected = product.default_variant();

    if let Some(size) = size {
        if !distinct_sizes(variants).contains(&size) {
            bail!(
                "Size '{}' not offered. Available: {}",
                size,
                distinct_sizes(variants).join(", ")
            );
        }
        if !size_available(variants, size) {
            ctx.output.warn(&format!("Size {} is out of stock", size));
        }
        selected = select_size(variants, selected, size);
    }

    if let Some(color) = color {
        if !distinct_colors(variants).contains(&color) {
            bail!(
                "Color '{}' not offered. Available: {}",
                color,
                distinct_colors(variants).join(", ")
            );
        }
        if !color_available(variants, color) {
            ctx.output.warn(&format!("Color {} is out of stock", color));
        }
        selected = select_color(variants, selected, color);
    }

    let stock = selected
        .map(|v| u32::try_from(v.stock_quantity).unwrap_or(0))
        .unwrap_or(0);
    let mut selector = QuantitySelector::new(stock);
    selector.set_from_input(quantity);

    if let Ok(requested) = quantity.trim().parse::<i64>() {
        if requested > i64::from(selector.quantity()) {
            ctx.output.warn(&format!(
                "Only {} in stock, adding {}",
                selector.max(),
                selector.quantity()
            ));
        }
    }

    if let Some(variant) = selected {
        if let Some(label) = variant.option_label() {
            ctx.output.debug(&format!("Selected {} ({})", variant.sku, label));
        }
        for note in selection_notes(product, variant) {
            ctx.output.info(&note);
        }
    }

    Ok(cart_line_for(
        product,
        selected,
        i64::from(selector.quantity()),
    )?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variant(id: i64, price: &str, compare_at: Option<&str>) -> ProductVariant {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "sku": format!("SKU-{}", id),
            "price": price,
            "compare_at_price": compare_at,
            "stock_quantity": 5,
            "is_in_stock": true,
        }))
        .unwrap()
    }

    fn product(variants: Vec<ProductVariant>) -> Product {
        Product {
            id: boutique_commerce::ProductId::new(1),
            title: "Robe".to_string(),
            slug: "robe".to_string(),
            brand: None,
            variants,
        }
    }

    #[test]
    fn test_selection_notes_sale_and_cheaper_option() {
        let sale = variant(1, "2500.00", Some("3000.00"));
        let p = product(vec![sale.clone(), variant(2, "1800.00", None)]);

        let notes = selection_notes(&p, &sale);
        assert_eq!(
            notes,
            vec![
                "On sale: 2500.00 DA (was 3000.00 DA)".to_string(),
                "Other options from 1800.00 DA".to_string(),
            ]
        );
    }

    #[test]
    fn test_selection_notes_cheapest_full_price() {
        let plain = variant(1, "1800.00", None);
        let p = product(vec![plain.clone(), variant(2, "2500.00", None)]);
        assert!(selection_notes(&p, &plain).is_empty());
    }

    #[test]
    fn test_price_cell_hides_unusable_price() {
        let line = CartLine::new(VariantId::new(1), 1).with_price("abc");
        assert_eq!(price_cell(&line), "-");

        let line = CartLine::new(VariantId::new(1), 1).with_price("12.50");
        assert_eq!(price_cell(&line), "12.50 DA");
    }
}
