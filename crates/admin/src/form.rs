//! The editable product draft and its image bookkeeping.
//!
//! The draft mirrors a product record but normalized for editing: colors
//! and categories are bare ids (whatever form the record held them in) so
//! checkbox state is a plain membership test, and images are split into two
//! disjoint tracks:
//!
//! - `images` - pending local uploads, not yet persisted
//! - `preview` - everything to render: persisted remote URLs when editing,
//!   plus one locally derived preview per pending upload
//!
//! When editing starts, `images` is empty (no re-upload implied) and
//! `preview` is seeded from the record. New selections append to both
//! tracks in order, so the tail of `preview` corresponds 1:1 to `images`.
//! The invariant `preview.len() >= images.len()` holds throughout. Local
//! previews are plain owned values; resetting the form or dropping it
//! releases them.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use magnolia_core::{CategoryId, ColorId, Price, PriceError, Product, Reference, Size};
use thiserror::Error;

use crate::remote::ProductPayload;

/// Draft validation errors, detected before any network call.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Name is required.
    #[error("Name is required")]
    MissingName,

    /// Description is required.
    #[error("Description is required")]
    MissingDescription,

    /// Price input is missing, unparseable, or negative.
    #[error(transparent)]
    Price(#[from] PriceError),
}

/// A pending local image file selected in the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    /// Original file name, sent with the multipart part.
    pub file_name: String,
    /// MIME type, e.g. `image/jpeg`.
    pub content_type: String,
    /// Raw file contents.
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    /// Create a pending upload from a selected file.
    #[must_use]
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    /// A displayable `data:` URL for this upload, used as its preview
    /// locator until the store assigns a real URL.
    #[must_use]
    pub fn data_url(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.content_type,
            BASE64.encode(&self.bytes)
        )
    }
}

/// A displayable image locator in the preview track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImagePreview {
    /// An already-persisted remote URL.
    Remote(String),
    /// A locally derived `data:` URL for a pending upload.
    Local(String),
}

impl ImagePreview {
    /// The displayable locator, whichever side it came from.
    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            Self::Remote(url) | Self::Local(url) => url,
        }
    }
}

/// The in-progress create/edit form state.
#[derive(Debug, Default, PartialEq)]
pub struct DraftForm {
    /// Product name input.
    pub name: String,
    /// Description input.
    pub description: String,
    /// Raw price input; validated on submit.
    pub price: String,
    /// Selected size tags.
    pub sizes: Vec<Size>,
    /// Selected color ids.
    pub colors: Vec<ColorId>,
    /// Selected category ids.
    pub categories: Vec<CategoryId>,
    images: Vec<ImageUpload>,
    preview: Vec<ImagePreview>,
}

impl DraftForm {
    /// Reset to all-empty defaults (create mode).
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Populate the draft from a persisted record (edit mode).
    ///
    /// Scalars are copied verbatim, relations are normalized to bare ids,
    /// pending uploads are cleared, and the preview is seeded from the
    /// record's images (falling back to the legacy single `image` field).
    pub fn load(&mut self, product: &Product) {
        self.name = product.name.clone();
        self.description = product.description.clone();
        self.price = product.price.to_string();
        self.sizes = product.sizes.clone();
        self.colors = product.colors.iter().map(|r| r.id().clone()).collect();
        self.categories = product.categories.iter().map(Reference::id).cloned().collect();
        self.images.clear();
        self.preview = product
            .display_images()
            .into_iter()
            .map(ImagePreview::Remote)
            .collect();
    }

    /// Toggle a size tag: adds it if absent, removes it if present.
    pub fn toggle_size(&mut self, size: Size) {
        toggle(&mut self.sizes, size);
    }

    /// Toggle a color selection.
    pub fn toggle_color(&mut self, id: ColorId) {
        toggle(&mut self.colors, id);
    }

    /// Toggle a category selection.
    pub fn toggle_category(&mut self, id: CategoryId) {
        toggle(&mut self.categories, id);
    }

    /// Append newly selected files to the pending track, with a matching
    /// preview locator per file, in the same order.
    pub fn add_files(&mut self, files: Vec<ImageUpload>) {
        for file in files {
            self.preview.push(ImagePreview::Local(file.data_url()));
            self.images.push(file);
        }
    }

    /// Pending local uploads.
    #[must_use]
    pub fn images(&self) -> &[ImageUpload] {
        &self.images
    }

    /// Everything to render in the preview strip.
    #[must_use]
    pub fn preview(&self) -> &[ImagePreview] {
        &self.preview
    }

    /// Validate the draft and build the submission payload.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when name or description is empty or the
    /// price input does not parse as a non-negative number. Nothing reaches
    /// the store on a validation failure.
    pub fn to_payload(&self) -> Result<ProductPayload, ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingName);
        }
        if self.description.trim().is_empty() {
            return Err(ValidationError::MissingDescription);
        }
        let price = Price::parse(&self.price)?;

        Ok(ProductPayload {
            name: self.name.trim().to_owned(),
            description: self.description.trim().to_owned(),
            price,
            sizes: self.sizes.clone(),
            colors: self.colors.clone(),
            categories: self.categories.clone(),
            images: self.images.clone(),
        })
    }
}

/// Add `value` if absent, remove it if present. Two identical toggles
/// cancel out.
fn toggle<T: PartialEq>(values: &mut Vec<T>, value: T) {
    if let Some(position) = values.iter().position(|v| *v == value) {
        values.remove(position);
    } else {
        values.push(value);
    }
}
