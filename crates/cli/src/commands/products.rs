//! Product catalog commands.
//!
//! # Usage
//!
//! ```bash
//! # Show the second page of the catalog
//! magnolia products list --page 2
//!
//! # Delete a product, skipping the prompt
//! magnolia products delete 68a1f2c4 --yes
//! ```

use std::io::{self, Write as _};

use magnolia_admin::AdminError;
use magnolia_admin::config::{AdminConfig, ConfigError};
use magnolia_admin::manager::ProductManager;
use magnolia_admin::remote::HttpProductStore;
use magnolia_core::ProductId;
use thiserror::Error;

/// Errors that can occur during product commands.
#[derive(Debug, Error)]
pub enum ProductCommandError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Engine operation failed.
    #[error(transparent)]
    Admin(#[from] AdminError),

    /// Reading the confirmation prompt failed.
    #[error("Could not read confirmation: {0}")]
    Prompt(#[from] io::Error),
}

async fn loaded_manager() -> Result<ProductManager<HttpProductStore>, ProductCommandError> {
    let config = AdminConfig::from_env()?;
    let store = HttpProductStore::new(&config);
    let mut manager = ProductManager::new(store);
    manager.load().await?;
    Ok(manager)
}

/// Show one admin-grid page of the catalog.
pub async fn list(page: usize) -> Result<(), ProductCommandError> {
    let mut manager = loaded_manager().await?;
    manager.go_to_page(page);

    println!(
        "Page {} of {} ({} products)",
        manager.current_page(),
        manager.total_pages(),
        manager.product_count()
    );

    for slot in manager.visible() {
        match slot {
            Some(product) => {
                let sizes: Vec<&str> = product.sizes.iter().map(|s| s.as_str()).collect();
                println!(
                    "  {}  {}  ${}  [{}]",
                    product.id,
                    product.name,
                    product.price,
                    sizes.join(", ")
                );
            }
            None => println!("  -"),
        }
    }

    let window: Vec<String> = manager
        .page_numbers()
        .iter()
        .map(ToString::to_string)
        .collect();
    if !window.is_empty() {
        println!("Pages: {}", window.join(" "));
    }
    Ok(())
}

/// Delete a product, prompting for confirmation unless `yes` is set.
pub async fn delete(id: &str, yes: bool) -> Result<(), ProductCommandError> {
    let id = ProductId::new(id);

    if !yes && !confirm(&format!("Delete product {id}? [y/N] "))? {
        println!("Aborted.");
        return Ok(());
    }

    let mut manager = loaded_manager().await?;
    manager.delete(&id).await?;
    println!("Deleted {id}.");
    Ok(())
}

fn confirm(prompt: &str) -> Result<bool, io::Error> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y"))
}
