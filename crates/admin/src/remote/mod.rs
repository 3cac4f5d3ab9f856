//! Remote catalog store client.
//!
//! The engine treats the store as an opaque async collaborator: list,
//! create, update, and delete for products, plus list endpoints for the
//! category and color lookups. Failures are always distinguishable from
//! empty results.

mod http;

pub use http::HttpProductStore;

use magnolia_core::{Category, CategoryId, Color, ColorId, Price, Product, ProductId, Size};
use thiserror::Error;

use crate::form::ImageUpload;

/// Errors that can occur when talking to the remote store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The request could not complete.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The store answered with a non-success status.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body, truncated for logging.
        message: String,
    },

    /// The response body could not be parsed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A request URL could not be built from the configured base.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

/// The payload for a create or update submission.
///
/// Sent as `multipart/form-data`: one text part per scalar field, one
/// repeated text part per selected size/color/category, and one file part
/// per pending image. The `images` field is omitted entirely when there are
/// no pending files, so an edit without new uploads leaves the persisted
/// images untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductPayload {
    /// Product name.
    pub name: String,
    /// Product description.
    pub description: String,
    /// Validated non-negative price.
    pub price: Price,
    /// Selected size tags.
    pub sizes: Vec<Size>,
    /// Selected color ids.
    pub colors: Vec<ColorId>,
    /// Selected category ids.
    pub categories: Vec<CategoryId>,
    /// Pending image uploads.
    pub images: Vec<ImageUpload>,
}

impl ProductPayload {
    /// The text parts of the multipart submission, in wire order.
    ///
    /// Scalar fields first, then one repeated entry per selected
    /// size/color/category. File parts are appended separately by the HTTP
    /// client.
    #[must_use]
    pub fn text_parts(&self) -> Vec<(&'static str, String)> {
        let mut parts = vec![
            ("name", self.name.clone()),
            ("description", self.description.clone()),
            ("price", self.price.to_string()),
        ];
        for size in &self.sizes {
            parts.push(("sizes", size.as_str().to_owned()));
        }
        for color in &self.colors {
            parts.push(("colors", color.to_string()));
        }
        for category in &self.categories {
            parts.push(("categories", category.to_string()));
        }
        parts
    }
}

/// Async interface to the remote catalog store.
///
/// Implemented by [`HttpProductStore`] in production and by in-memory fakes
/// in tests. The engine is generic over this trait rather than holding a
/// trait object, so the async methods stay plain `async fn`s.
#[allow(async_fn_in_trait)]
pub trait ProductStore {
    /// Fetch the full product set.
    async fn list_products(&self) -> Result<Vec<Product>, StoreError>;

    /// Create a product; returns the persisted record with its new id.
    async fn create_product(&self, payload: &ProductPayload) -> Result<Product, StoreError>;

    /// Replace an existing product; returns the persisted record.
    async fn update_product(
        &self,
        id: &ProductId,
        payload: &ProductPayload,
    ) -> Result<Product, StoreError>;

    /// Delete a product.
    async fn delete_product(&self, id: &ProductId) -> Result<(), StoreError>;

    /// Fetch the full category list.
    async fn list_categories(&self) -> Result<Vec<Category>, StoreError>;

    /// Fetch the full color list.
    async fn list_colors(&self) -> Result<Vec<Color>, StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn payload() -> ProductPayload {
        ProductPayload {
            name: "Conjunto Flor".to_owned(),
            description: "Encaje suave".to_owned(),
            price: Price::new(Decimal::new(3450, 2)).unwrap(),
            sizes: vec![Size::S, Size::M],
            colors: vec![ColorId::new("c-1"), ColorId::new("c-2")],
            categories: vec![CategoryId::new("cat-1")],
            images: vec![],
        }
    }

    #[test]
    fn test_text_parts_repeat_multi_select_fields() {
        let parts = payload().text_parts();
        assert_eq!(
            parts,
            vec![
                ("name", "Conjunto Flor".to_owned()),
                ("description", "Encaje suave".to_owned()),
                ("price", "34.50".to_owned()),
                ("sizes", "S".to_owned()),
                ("sizes", "M".to_owned()),
                ("colors", "c-1".to_owned()),
                ("colors", "c-2".to_owned()),
                ("categories", "cat-1".to_owned()),
            ]
        );
    }

    #[test]
    fn test_store_error_display() {
        let err = StoreError::Api {
            status: 502,
            message: "bad gateway".to_owned(),
        };
        assert_eq!(err.to_string(), "API error (502): bad gateway");
    }
}
