//! Endenture CLI - browse the catalog and manage the cart from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # List products, cheapest first
//! endenture products --sort price_asc
//!
//! # Show a product page, optionally from a grid link
//! endenture product --id backpack
//! endenture product --location "product-details.html?id=jacket&img=images/product-1-alt2.jpg"
//!
//! # Add two jackets, then adjust the cart
//! endenture add jacket --qty 2
//! endenture update jacket=1 boots=3
//! endenture remove boots
//! endenture cart
//! ```
//!
//! # Commands
//!
//! - `products` - Print the product grid
//! - `product` - Print a product detail page
//! - `add` / `remove` / `update` / `clear` - Change the cart
//! - `cart` / `count` - Print the cart page or the badge count

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use endenture_core::SortMode;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod commands;
mod output;

#[derive(Parser)]
#[command(name = "endenture")]
#[command(author, version, about = "Endenture storefront CLI")]
struct Cli {
    /// Directory holding the persisted cart (overrides `ENDENTURE_DATA_DIR`)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the product grid
    Products {
        /// Ordering (`name_asc`, `price_asc`, `price_desc`, `rating_desc`)
        #[arg(short, long)]
        sort: Option<SortMode>,
    },
    /// Print a product detail page
    Product {
        /// Product id; unknown or missing ids show the default product
        #[arg(long, conflicts_with = "location")]
        id: Option<String>,

        /// Image to show large
        #[arg(long, conflicts_with = "location")]
        image: Option<String>,

        /// Detail page href, e.g. `product-details.html?id=jacket`
        #[arg(long)]
        location: Option<String>,

        /// Thumbnail to select after rendering
        #[arg(long)]
        select: Option<String>,
    },
    /// Add a product to the cart and show the cart
    Add {
        /// Product id
        id: String,

        /// Quantity as typed; empty or non-numeric input adds one
        #[arg(short, long, default_value = "1", allow_hyphen_values = true)]
        qty: String,
    },
    /// Remove a product from the cart
    Remove {
        /// Product id
        id: String,
    },
    /// Set quantities for several cart lines at once
    Update {
        /// `ID=QTY` pairs
        #[arg(required = true, value_parser = commands::cart::parse_assignment)]
        quantities: Vec<(String, String)>,
    },
    /// Print the cart page
    Cart,
    /// Print the number of units in the cart
    Count,
    /// Empty the cart
    Clear,
}

fn main() {
    // Diagnostics go to stderr; stdout carries the rendered pages
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "endenture_storefront=info,endenture=info".into());

    let json = std::env::var("ENDENTURE_LOG_FORMAT").is_ok_and(|format| format == "json");
    let json_layer = json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
    });
    let text_layer = (!json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = commands::open(cli.data_dir)?;
    let mut out = std::io::stdout().lock();

    match cli.command {
        Commands::Products { sort } => commands::catalog::products(&mut store, sort, &mut out)?,
        Commands::Product {
            id,
            image,
            location,
            select,
        } => {
            let request = match location {
                Some(href) => commands::catalog::DetailRequest::from_href(&href)?,
                None => commands::catalog::DetailRequest { id, image },
            };
            commands::catalog::product(&store, &request, select.as_deref(), &mut out)?;
        }
        Commands::Add { id, qty } => commands::cart::add(&mut store, &id, &qty, &mut out)?,
        Commands::Remove { id } => commands::cart::remove(&mut store, &id, &mut out)?,
        Commands::Update { quantities } => {
            commands::cart::update(&mut store, quantities, &mut out)?;
        }
        Commands::Cart => commands::cart::show(&store, &mut out)?,
        Commands::Count => commands::cart::count(&store, &mut out)?,
        Commands::Clear => commands::cart::clear(&mut store, &mut out)?,
    }
    Ok(())
}
