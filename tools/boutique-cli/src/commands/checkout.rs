//! Guest checkout.

use anyhow::{bail, Result};
use boutique_commerce::checkout::{place_order, CustomerDetails, OrderConfirmation};
use boutique_commerce::{BaladiyaId, WilayaId};
use dialoguer::Confirm;

use super::cart::show_cart;
use super::CheckoutArgs;
use crate::context::Context;

/// Run the checkout command.
pub async fn run(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.open_cart(args.profile.as_deref())?;

    if store.cart().is_empty() {
        bail!("Your cart is empty. Add items with `boutique cart add` first.");
    }

    let customer = CustomerDetails {
        name: args.name,
        phone: args.phone,
        address: args.address,
        wilaya: WilayaId::new(args.wilaya),
        baladiya: BaladiyaId::new(args.baladiya),
    };
    customer.validate()?;

    if !ctx.output.is_json() {
        show_cart(store.cart(), ctx);
        ctx.output.kv("Deliver to", &customer.name);
        ctx.output.kv("Phone", &customer.phone);
        ctx.output.kv("Address", &customer.address);
    }

    if !args.yes && !ctx.output.is_json() {
        let confirmed = Confirm::new()
            .with_prompt(format!("Place order for {}?", store.total_price()))
            .default(true)
            .interact()?;

        if !confirmed {
            ctx.output.warn("Checkout cancelled");
            return Ok(());
        }
    }

    let gateway = ctx.gateway()?;
    ctx.output
        .debug(&format!("Submitting to {}", gateway.checkout_url()));

    let spinner = ctx.output.spinner("Placing order...");
    let result = place_order(&mut store, &gateway, customer).await;
    spinner.finish_and_clear();

    let order = match result {
        Ok(order) => order,
        Err(e) => {
            ctx.output.warn("Your cart was kept so you can try again");
            return Err(e.into());
        }
    };

    report_order(&order, ctx);
    Ok(())
}

fn report_order(order: &OrderConfirmation, ctx: &Context) {
    if ctx.output.is_json() {
        ctx.output.json(order);
        return;
    }

    ctx.output
        .success(&format!("Order placed: {}", order.reference));
    if let Some(ref status) = order.status {
        ctx.output.kv("Status", status);
    }
    if let Some(ref subtotal) = order.subtotal {
        ctx.output.kv("Subtotal", subtotal);
    }
    if let Some(ref shipping) = order.shipping_cost {
        ctx.output.kv("Shipping", shipping);
    }
    if let Some(ref total) = order.total {
        ctx.output.kv("Total", total);
    }
    if let Some(ref method) = order.payment_method {
        ctx.output.kv("Payment", method);
    }
    ctx.output.info("Keep the order reference to look up your order later");
}
