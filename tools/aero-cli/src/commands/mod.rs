//! CLI command implementations.

pub mod cart;
pub mod config;
pub mod menu;

use aero_commerce::cart::DeliveryMode;
use clap::{Args, Subcommand};

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: CartCommand,
}

#[derive(Subcommand)]
pub enum CartCommand {
    /// Show the cart contents and totals.
    Show {
        /// Delivery mode used for the totals.
        #[arg(short, long, default_value = "delivery")]
        mode: DeliveryMode,
    },
    /// Add one unit of a menu product.
    Add {
        /// Product id from the menu.
        product_id: String,
    },
    /// Change a line's quantity by a signed delta.
    Qty {
        /// Product id.
        product_id: String,
        /// Amount to add (negative to remove units).
        #[arg(allow_negative_numbers = true)]
        delta: i64,
    },
    /// Set the notes of a line.
    Notes {
        /// Product id.
        product_id: String,
        /// Note for the kitchen.
        text: String,
    },
    /// Remove a line.
    Remove {
        /// Product id.
        product_id: String,
    },
    /// Empty the cart.
    Clear {
        /// Skip confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },
    /// Print the order total.
    Total {
        /// DELIVERY adds the delivery fee; PICKUP does not.
        #[arg(short, long, default_value = "delivery")]
        mode: DeliveryMode,
    },
    /// Print the number of units in the cart.
    Count,
    /// Re-read the cart from storage.
    Reload,
}

/// Arguments for the menu command.
#[derive(Args)]
pub struct MenuArgs {
    /// Only list this category.
    #[arg(short, long)]
    pub category: Option<String>,

    /// Hide unavailable products.
    #[arg(long)]
    pub available: bool,
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
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}
