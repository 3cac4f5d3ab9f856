//! The locally cached product set.
//!
//! The cache is the single source of truth for every view. It is only ever
//! replaced wholesale from a successful fetch, never patched, so it cannot
//! drift from the store's ordering or filtering. If a fetch fails the
//! previous contents stay in place (stale-but-valid) and the error
//! propagates to the caller.

use magnolia_core::{Product, ProductId};
use tracing::debug;

use crate::remote::{ProductStore, StoreError};

/// The in-memory copy of all product records, in remote order.
#[derive(Debug, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// All cached products, in the order the store returned them.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of cached products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|product| &product.id == id)
    }

    /// Fetch the full product set and atomically replace the cache.
    ///
    /// Concurrent refreshes are not coalesced; the last one to resolve wins
    /// over the whole cache.
    ///
    /// # Errors
    ///
    /// Returns the fetch error with the cache contents unchanged.
    pub async fn refresh<S: ProductStore>(&mut self, store: &S) -> Result<(), StoreError> {
        let products = store.list_products().await?;
        debug!(count = products.len(), "replacing catalog contents");
        self.products = products;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use magnolia_core::Price;
    use rust_decimal::Decimal;

    fn product(id: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Producto {id}"),
            description: String::new(),
            price: Price::new(Decimal::TEN).unwrap(),
            sizes: vec![],
            colors: vec![],
            categories: vec![],
            images: vec![],
            image: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_get_by_id() {
        let catalog = Catalog {
            products: vec![product("p-1"), product("p-2")],
        };
        assert_eq!(
            catalog.get(&ProductId::new("p-2")).map(|p| p.name.as_str()),
            Some("Producto p-2")
        );
        assert!(catalog.get(&ProductId::new("p-9")).is_none());
    }

    #[test]
    fn test_default_is_empty() {
        let catalog = Catalog::default();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
    }
}
