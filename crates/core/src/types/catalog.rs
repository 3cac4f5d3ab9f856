//! Catalog entity types.
//!
//! These mirror the shapes the remote store emits. Ids arrive under the
//! store's `_id` spelling (with `id` accepted as an alias), relations arrive
//! in dual form (see [`Reference`]), and records created before multi-image
//! support carry a legacy single `image` field alongside the `images` list.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::{CategoryId, ColorId, ProductId};
use super::price::Price;
use super::reference::{Entity, Reference};
use super::size::Size;

/// A product category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category id, assigned by the remote store.
    #[serde(alias = "_id")]
    pub id: CategoryId,
    /// Display name.
    pub name: String,
    /// Optional description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Entity for Category {
    type Id = CategoryId;

    fn id(&self) -> &CategoryId {
        &self.id
    }
}

/// A product color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    /// Color id, assigned by the remote store.
    #[serde(alias = "_id")]
    pub id: ColorId,
    /// Display name.
    pub name: String,
    /// Optional CSS hex value for swatch rendering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hex: Option<String>,
}

impl Entity for Color {
    type Id = ColorId;

    fn id(&self) -> &ColorId {
        &self.id
    }
}

/// A persisted product record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Product id, assigned by the remote store, immutable once created.
    #[serde(alias = "_id")]
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Product description.
    #[serde(default)]
    pub description: String,
    /// Non-negative price.
    pub price: Price,
    /// Available size tags.
    #[serde(default)]
    pub sizes: Vec<Size>,
    /// Color references, bare or embedded.
    #[serde(default)]
    pub colors: Vec<Reference<Color>>,
    /// Category references, bare or embedded.
    #[serde(default)]
    pub categories: Vec<Reference<Category>>,
    /// Persisted image URLs, in display order.
    #[serde(default)]
    pub images: Vec<String>,
    /// Legacy single-image field on records created before multi-image support.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Creation timestamp, when the store provides one.
    #[serde(default, alias = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last-update timestamp, when the store provides one.
    #[serde(default, alias = "updatedAt", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &ProductId {
        &self.id
    }
}

impl Product {
    /// The image URLs to display for this record.
    ///
    /// Falls back to the legacy `image` field for old records with no
    /// `images` entries.
    #[must_use]
    pub fn display_images(&self) -> Vec<String> {
        if !self.images.is_empty() {
            return self.images.clone();
        }
        self.image.clone().into_iter().collect()
    }
}
