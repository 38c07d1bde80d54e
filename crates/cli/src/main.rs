//! Dukkan CLI - Drives the storefront widget from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # List the catalog
//! dukkan catalog
//!
//! # Search the catalog
//! dukkan search "جهاز سكر"
//!
//! # Add a product and persist the catalog document
//! dukkan catalog add --name "جهاز ضغط" --price 950 \
//!     --image assets/bp.jpg --image assets/bp-side.jpg
//!
//! # Remove a product by id
//! dukkan catalog remove 3
//!
//! # Compose an order and print the WhatsApp deep-link
//! dukkan order --name "أحمد" --phone 01000000000 --address "القاهرة" \
//!     --item 1 --item 1 --item 2
//! ```
//!
//! # Commands
//!
//! - `catalog` - List, add, or remove catalog products
//! - `search` - Filter products by free-text query
//! - `order` - Simulate a cart and print the composed order message

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "dukkan")]
#[command(author, version, about = "Dukkan storefront widget CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List, add, or remove catalog products
    Catalog {
        #[command(subcommand)]
        action: Option<CatalogAction>,
    },
    /// Filter products by free-text query
    Search {
        /// Query matched against product names and descriptions
        query: String,
    },
    /// Simulate a cart and print the composed order message and deep-link
    Order {
        /// Customer name
        #[arg(long)]
        name: String,

        /// Customer phone
        #[arg(long)]
        phone: String,

        /// Delivery address
        #[arg(long)]
        address: String,

        /// Product id to add; repeat the flag to add more units
        #[arg(long = "item", required = true)]
        items: Vec<i32>,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// List all catalog products (the default)
    List,
    /// Add a product and persist the catalog document
    Add {
        /// Product name
        #[arg(long)]
        name: String,

        /// Current unit price
        #[arg(long)]
        price: String,

        /// Struck-through previous price
        #[arg(long)]
        old_price: Option<String>,

        /// Long description shown in the detail view
        #[arg(long)]
        description: Option<String>,

        /// Gallery image; repeat the flag, the first one becomes the cover
        #[arg(long = "image")]
        images: Vec<String>,

        /// Category id
        #[arg(long)]
        category: Option<i32>,
    },
    /// Remove a product by id and persist the catalog document
    Remove {
        /// Id of the product to remove
        id: i32,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Catalog { action } => match action {
            None | Some(CatalogAction::List) => commands::catalog::list()?,
            Some(CatalogAction::Add {
                name,
                price,
                old_price,
                description,
                images,
                category,
            }) => commands::catalog::add(
                &name,
                &price,
                old_price.as_deref(),
                description,
                images,
                category,
            )?,
            Some(CatalogAction::Remove { id }) => commands::catalog::remove(id)?,
        },
        Commands::Search { query } => commands::catalog::search(&query)?,
        Commands::Order {
            name,
            phone,
            address,
            items,
        } => commands::order::submit(&name, &phone, &address, &items)?,
    }
    Ok(())
}
