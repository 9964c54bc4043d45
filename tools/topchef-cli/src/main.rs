//! Top Chef CLI - cart and order surface for the Top Chef restaurant.
//!
//! Commands:
//! - `topchef add` / `remove` / `qty` / `inc` / `dec` - Edit the cart
//! - `topchef show` - Render the cart
//! - `topchef clear` - Empty the cart
//! - `topchef checkout` - Send the cart to the restaurant on WhatsApp
//! - `topchef order` - Send a full order form on WhatsApp
//! - `topchef config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{
    AddArgs, CheckoutArgs, ClearArgs, ConfigArgs, ItemArgs, OrderArgs, QuantityArgs,
};

/// Top Chef CLI - manage your cart and send orders
#[derive(Parser)]
#[command(name = "topchef")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add one unit of a dish to the cart
    Add(AddArgs),

    /// Remove an item from the cart
    Remove(ItemArgs),

    /// Set the quantity of an item
    Qty(QuantityArgs),

    /// Increase an item's quantity by one
    Inc(ItemArgs),

    /// Decrease an item's quantity by one
    Dec(ItemArgs),

    /// Show the cart
    Show,

    /// Empty the cart
    Clear(ClearArgs),

    /// Send the cart as an order and empty it
    Checkout(CheckoutArgs),

    /// Send a full order with customer details
    Order(OrderArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;

    // Execute command
    let result = match cli.command {
        Commands::Add(args) => commands::cart::add(args, &ctx),
        Commands::Remove(args) => commands::cart::remove(args, &ctx),
        Commands::Qty(args) => commands::cart::set_quantity(args, &ctx),
        Commands::Inc(args) => commands::cart::adjust(args, 1, &ctx),
        Commands::Dec(args) => commands::cart::adjust(args, -1, &ctx),
        Commands::Show => commands::cart::show(&ctx),
        Commands::Clear(args) => commands::cart::clear(args, &ctx),
        Commands::Checkout(args) => commands::checkout::checkout(args, &ctx),
        Commands::Order(args) => commands::checkout::order(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

/// Log to stderr, filtered by `RUST_LOG` when set.
fn init_tracing(verbose: bool) {
    let default = if verbose {
        "topchef=debug,topchef_commerce=debug,topchef_cache=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
