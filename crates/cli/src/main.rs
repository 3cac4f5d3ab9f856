//! Magnolia CLI - catalog inspection and management tools.
//!
//! # Usage
//!
//! ```bash
//! # Show a page of the product catalog
//! magnolia products list --page 2
//!
//! # Delete a product (asks for confirmation)
//! magnolia products delete 68a1f2c4
//! ```
//!
//! # Commands
//!
//! - `products list` - Show the catalog, one admin-grid page at a time
//! - `products delete` - Delete a product from the remote store
//!
//! # Environment Variables
//!
//! - `MAGNOLIA_API_URL` - Base URL of the remote catalog store
//! - `MAGNOLIA_API_TOKEN` - Bearer token for admin endpoints (optional)

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "magnolia")]
#[command(author, version, about = "Magnolia CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect and manage catalog products
    Products {
        #[command(subcommand)]
        action: ProductAction,
    },
}

#[derive(Subcommand)]
enum ProductAction {
    /// Show a page of the product catalog
    List {
        /// 1-indexed page to show
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },
    /// Delete a product from the remote store
    Delete {
        /// Id of the product to delete
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Products { action } => match action {
            ProductAction::List { page } => commands::products::list(page).await,
            ProductAction::Delete { id, yes } => commands::products::delete(&id, yes).await,
        },
    };

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}
