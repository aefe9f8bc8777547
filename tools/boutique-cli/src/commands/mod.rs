//! CLI command implementations.

pub mod cart;
pub mod checkout;
pub mod config;

use clap::{Args, Subcommand};

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: Option<CartCommand>,

    /// Named cart to use instead of the default one.
    #[arg(short, long, global = true)]
    pub profile: Option<String>,
}

#[derive(Subcommand)]
pub enum CartCommand {
    /// Show the cart contents and totals.
    Show,
    /// Add a variant to the cart.
    Add {
        /// Variant ID.
        variant_id: i64,

        /// Quantity to add.
        #[arg(short, long, default_value = "1")]
        quantity: u32,

        /// SKU snapshot.
        #[arg(long)]
        sku: Option<String>,

        /// Title snapshot.
        #[arg(long)]
        title: Option<String>,

        /// Unit price snapshot, as a decimal string.
        #[arg(long)]
        price: Option<String>,

        /// Image URL snapshot.
        #[arg(long)]
        image: Option<String>,
    },
    /// Add a variant picked from a product JSON file.
    AddProduct {
        /// Product JSON file, as served by the catalog API.
        file: String,

        /// Size to select.
        #[arg(long)]
        size: Option<String>,

        /// Color to select.
        #[arg(long)]
        color: Option<String>,

        /// Quantity, as typed into the quantity field.
        #[arg(short, long, default_value = "1")]
        quantity: String,
    },
    /// Remove a variant from the cart.
    Remove {
        /// Variant ID.
        variant_id: i64,
    },
    /// Set the quantity of a variant (0 or less removes it).
    Update {
        /// Variant ID.
        variant_id: i64,

        /// New quantity.
        #[arg(allow_hyphen_values = true)]
        quantity: i64,
    },
    /// Empty the cart.
    Clear {
        /// Skip confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },
}

/// Arguments for the checkout command.
#[derive(Args)]
pub struct CheckoutArgs {
    /// Customer full name.
    #[arg(long)]
    pub name: String,

    /// Customer phone number.
    #[arg(long)]
    pub phone: String,

    /// Delivery address.
    #[arg(long)]
    pub address: String,

    /// Wilaya (province) ID.
    #[arg(long)]
    pub wilaya: i64,

    /// Baladiya (municipality) ID.
    #[arg(long)]
    pub baladiya: i64,

    /// Named cart to check out.
    #[arg(short, long)]
    pub profile: Option<String>,

    /// Skip confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Get a config value.
    Get {
        /// Config key (dot-separated).
        key: String,
    },
    /// Set a config value.
    Set {
        /// Config key (dot-separated).
        key: String,
        /// Value to set.
        value: String,
    },
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}
