//! CLI command implementations.

pub mod cart;
pub mod checkout;
pub mod config;

use clap::{Args, Subcommand};
use topchef_commerce::checkout::OrderType;
use topchef_commerce::LineItemId;

/// Arguments for the add command.
#[derive(Args)]
pub struct AddArgs {
    /// Dish name.
    pub name: String,

    /// Unit price in F CFA.
    #[arg(value_parser = clap::value_parser!(i64).range(0..))]
    pub price: i64,

    /// Image URL.
    #[arg(short, long, default_value = "")]
    pub image: String,
}

/// Arguments for commands targeting one cart item.
#[derive(Args)]
pub struct ItemArgs {
    /// Item ID, as shown by `topchef show`.
    pub id: LineItemId,
}

/// Arguments for the qty command.
#[derive(Args)]
pub struct QuantityArgs {
    /// Item ID, as shown by `topchef show`.
    pub id: LineItemId,

    /// New quantity; zero or less removes the item.
    #[arg(allow_hyphen_values = true)]
    pub quantity: i64,
}

/// Arguments for the clear command.
#[derive(Args)]
pub struct ClearArgs {
    /// Skip confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the checkout command.
#[derive(Args)]
pub struct CheckoutArgs {
    /// Print the message without sending it or clearing the cart.
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the order command.
#[derive(Args)]
pub struct OrderArgs {
    /// Customer name.
    #[arg(long)]
    pub name: String,

    /// Customer WhatsApp number.
    #[arg(long)]
    pub phone: String,

    /// Order type: livraison or emporter.
    #[arg(long = "type", default_value = "emporter")]
    pub order_type: OrderType,

    /// Delivery address (required for livraison).
    #[arg(long)]
    pub address: Option<String>,

    /// Special request for the kitchen.
    #[arg(long)]
    pub note: Option<String>,

    /// Dish as "Name - price", optionally followed by ":quantity".
    #[arg(short, long = "dish", required = true)]
    pub dishes: Vec<String>,

    /// Print the message without sending it.
    #[arg(long)]
    pub dry_run: bool,
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
