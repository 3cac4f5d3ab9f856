//! The mutation orchestrator behind the admin product manager.
//!
//! Owns the catalog cache, the pagination state, the draft form, and the
//! lookup lists, and sequences every remote mutation: submit and delete go
//! to the store, and on success the cache is refreshed wholesale, the page
//! re-clamped, and the form reset or invalidated. Failures leave all prior
//! state intact.
//!
//! One operation runs at a time. The `&mut self` receivers make overlap
//! structurally impossible within one owner; the operation state machine makes
//! the rule explicit at the API boundary and turns a re-entrant request
//! into [`AdminError::Busy`] with no state change.

use magnolia_core::{Category, CategoryId, Color, ColorId, Product, ProductId, Size};
use tracing::{info, instrument};

use crate::catalog::Catalog;
use crate::error::AdminError;
use crate::form::{DraftForm, ImagePreview, ImageUpload};
use crate::pagination::{clamp_page, page_window, project, total_pages};
use crate::remote::ProductStore;

/// Which operation, if any, is currently in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OpState {
    Idle,
    Submitting,
    Deleting,
}

/// State engine for the admin product manager.
///
/// Generic over the store so tests can drive it against an in-memory fake.
#[derive(Debug)]
pub struct ProductManager<S> {
    store: S,
    catalog: Catalog,
    categories: Vec<Category>,
    colors: Vec<Color>,
    form: DraftForm,
    editing: Option<ProductId>,
    current_page: usize,
    op: OpState,
}

impl<S: ProductStore> ProductManager<S> {
    /// Create a manager over the given store, in create mode on page 1.
    pub fn new(store: S) -> Self {
        Self {
            store,
            catalog: Catalog::default(),
            categories: Vec::new(),
            colors: Vec::new(),
            form: DraftForm::default(),
            editing: None,
            current_page: 1,
            op: OpState::Idle,
        }
    }

    /// Initial load: products plus the category and color lookups used to
    /// render the checkbox groups.
    ///
    /// # Errors
    ///
    /// Returns the first fetch error; whatever loaded before it stays.
    pub async fn load(&mut self) -> Result<(), AdminError> {
        self.refresh().await?;
        self.categories = self.store.list_categories().await?;
        self.colors = self.store.list_colors().await?;
        Ok(())
    }

    /// Refresh the catalog from the store.
    ///
    /// On success the page is re-clamped into the new range and a draft
    /// editing a record that no longer exists is reset to create mode. On
    /// failure the cache stays stale-but-valid and nothing else changes.
    ///
    /// # Errors
    ///
    /// Returns the fetch error from the store.
    pub async fn refresh(&mut self) -> Result<(), AdminError> {
        self.catalog.refresh(&self.store).await?;
        self.current_page = clamp_page(self.current_page, self.total_pages());
        if let Some(id) = self.editing.clone() {
            if self.catalog.get(&id).is_none() {
                info!(product_id = %id, "edited record vanished from the store, back to create mode");
                self.start_create();
            }
        }
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Read-only projections
    // ---------------------------------------------------------------------

    /// The visible page as a fixed grid of 4 slots; `None` slots are
    /// non-interactive placeholders.
    #[must_use]
    pub fn visible(&self) -> Vec<Option<&Product>> {
        project(self.catalog.products(), self.current_page)
    }

    /// Total number of pages (zero when the catalog is empty).
    #[must_use]
    pub fn total_pages(&self) -> usize {
        total_pages(self.catalog.len())
    }

    /// The current 1-indexed page.
    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    /// The bounded window of page links to render.
    #[must_use]
    pub fn page_numbers(&self) -> Vec<usize> {
        page_window(self.current_page, self.total_pages())
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn product_count(&self) -> usize {
        self.catalog.len()
    }

    /// The current draft.
    #[must_use]
    pub const fn draft(&self) -> &DraftForm {
        &self.form
    }

    /// Mutable access to the draft's text inputs.
    pub const fn draft_mut(&mut self) -> &mut DraftForm {
        &mut self.form
    }

    /// The preview strip for the current draft.
    #[must_use]
    pub fn preview(&self) -> &[ImagePreview] {
        self.form.preview()
    }

    /// The record currently being edited, if any.
    #[must_use]
    pub const fn editing_id(&self) -> Option<&ProductId> {
        self.editing.as_ref()
    }

    /// Whether a submit or delete is in flight.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.op != OpState::Idle
    }

    /// Category lookup for the checkbox group.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Color lookup for the checkbox group.
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    // ---------------------------------------------------------------------
    // Form actions
    // ---------------------------------------------------------------------

    /// Switch to create mode with an all-empty draft.
    pub fn start_create(&mut self) {
        self.form.reset();
        self.editing = None;
    }

    /// Load an existing record into the draft and switch to edit mode.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::NotFound`] when the id is absent from the
    /// current cache; the draft is left as it was.
    pub fn start_edit(&mut self, id: &ProductId) -> Result<(), AdminError> {
        let product = self
            .catalog
            .get(id)
            .cloned()
            .ok_or_else(|| AdminError::NotFound(id.clone()))?;
        self.form.load(&product);
        self.editing = Some(product.id);
        Ok(())
    }

    /// Toggle a size tag on the draft.
    pub fn toggle_size(&mut self, size: Size) {
        self.form.toggle_size(size);
    }

    /// Toggle a color selection on the draft.
    pub fn toggle_color(&mut self, id: ColorId) {
        self.form.toggle_color(id);
    }

    /// Toggle a category selection on the draft.
    pub fn toggle_category(&mut self, id: CategoryId) {
        self.form.toggle_category(id);
    }

    /// Append newly selected image files to the draft.
    pub fn add_files(&mut self, files: Vec<ImageUpload>) {
        self.form.add_files(files);
    }

    // ---------------------------------------------------------------------
    // Mutations
    // ---------------------------------------------------------------------

    /// Submit the draft: create when no record is being edited, update
    /// otherwise.
    ///
    /// On success the catalog is refreshed and the form resets to create
    /// mode, also after an edit. On failure the draft and editing id are
    /// left untouched so no input is lost.
    ///
    /// # Errors
    ///
    /// [`AdminError::Busy`] while another operation is in flight,
    /// [`AdminError::Validation`] before any network call, or the store
    /// error from the dispatch or the follow-up refresh.
    #[instrument(skip(self), fields(editing = ?self.editing))]
    pub async fn submit(&mut self) -> Result<(), AdminError> {
        if self.is_busy() {
            return Err(AdminError::Busy);
        }
        self.op = OpState::Submitting;
        let result = self.submit_inner().await;
        self.op = OpState::Idle;
        result
    }

    async fn submit_inner(&mut self) -> Result<(), AdminError> {
        let payload = self.form.to_payload()?;

        let saved = match &self.editing {
            Some(id) => self.store.update_product(id, &payload).await?,
            None => self.store.create_product(&payload).await?,
        };
        info!(product_id = %saved.id, "product saved");

        self.refresh().await?;
        self.start_create();
        Ok(())
    }

    /// Delete a product. Interactive confirmation is the call site's job.
    ///
    /// On success the catalog is refreshed and the page re-clamped, which
    /// steps back one page when the deleted record was the last one on a
    /// page beyond the first. Deleting the record currently being edited
    /// also resets the form to create mode.
    ///
    /// # Errors
    ///
    /// [`AdminError::Busy`] while another operation is in flight,
    /// [`AdminError::NotFound`] when the id is not in the current cache, or
    /// the store error with the cache and page left unchanged.
    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn delete(&mut self, id: &ProductId) -> Result<(), AdminError> {
        if self.is_busy() {
            return Err(AdminError::Busy);
        }
        self.op = OpState::Deleting;
        let result = self.delete_inner(id).await;
        self.op = OpState::Idle;
        result
    }

    async fn delete_inner(&mut self, id: &ProductId) -> Result<(), AdminError> {
        if self.catalog.get(id).is_none() {
            return Err(AdminError::NotFound(id.clone()));
        }
        self.store.delete_product(id).await?;
        info!(product_id = %id, "product deleted");

        // Required consistency rule: a draft must never point at a record
        // that is gone, even if the follow-up refresh fails.
        if self.editing.as_ref() == Some(id) {
            self.start_create();
        }
        self.refresh().await?;
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Page navigation
    // ---------------------------------------------------------------------

    /// Jump to a page, clamped into the valid range.
    pub fn go_to_page(&mut self, page: usize) {
        self.current_page = clamp_page(page, self.total_pages());
    }

    /// Advance one page, saturating at the last page.
    pub fn next_page(&mut self) {
        self.go_to_page(self.current_page + 1);
    }

    /// Step back one page, saturating at page 1.
    pub fn prev_page(&mut self) {
        self.go_to_page(self.current_page.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::{ProductPayload, StoreError};
    use magnolia_core::{Price, Reference};
    use rust_decimal::Decimal;

    /// Store whose product set is fixed; mutations must never be reached.
    struct FixedStore(Vec<Product>);

    fn unexpected_mutation() -> StoreError {
        StoreError::Api {
            status: 500,
            message: "no mutation expected".to_owned(),
        }
    }

    impl ProductStore for FixedStore {
        async fn list_products(&self) -> Result<Vec<Product>, StoreError> {
            Ok(self.0.clone())
        }

        async fn create_product(&self, _: &ProductPayload) -> Result<Product, StoreError> {
            Err(unexpected_mutation())
        }

        async fn update_product(
            &self,
            _: &ProductId,
            _: &ProductPayload,
        ) -> Result<Product, StoreError> {
            Err(unexpected_mutation())
        }

        async fn delete_product(&self, _: &ProductId) -> Result<(), StoreError> {
            Err(unexpected_mutation())
        }

        async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
            Ok(vec![])
        }

        async fn list_colors(&self) -> Result<Vec<Color>, StoreError> {
            Ok(vec![])
        }
    }

    fn product(id: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Producto {id}"),
            description: "Descripción".to_owned(),
            price: Price::new(Decimal::TEN).unwrap(),
            sizes: vec![],
            colors: vec![Reference::Id(ColorId::new("c-1"))],
            categories: vec![],
            images: vec![],
            image: None,
            created_at: None,
            updated_at: None,
        }
    }

    async fn editing_manager() -> ProductManager<FixedStore> {
        let mut manager = ProductManager::new(FixedStore(vec![product("p-1"), product("p-2")]));
        manager.load().await.unwrap();
        manager.start_edit(&ProductId::new("p-1")).unwrap();
        manager.draft_mut().name = "Bra X".to_owned();
        manager
    }

    #[tokio::test]
    async fn submit_while_busy_is_rejected_with_no_state_change() {
        let mut manager = editing_manager().await;
        manager.op = OpState::Deleting;

        assert!(matches!(manager.submit().await, Err(AdminError::Busy)));

        // The rejection touches nothing, including the in-flight marker
        assert!(manager.is_busy());
        assert_eq!(manager.draft().name, "Bra X");
        assert_eq!(manager.editing_id(), Some(&ProductId::new("p-1")));
        assert_eq!(manager.product_count(), 2);
        assert_eq!(manager.current_page(), 1);
    }

    #[tokio::test]
    async fn delete_while_busy_is_rejected_with_no_state_change() {
        let mut manager = editing_manager().await;
        manager.op = OpState::Submitting;

        assert!(matches!(
            manager.delete(&ProductId::new("p-2")).await,
            Err(AdminError::Busy)
        ));

        assert!(manager.is_busy());
        assert_eq!(manager.product_count(), 2);
        assert_eq!(manager.editing_id(), Some(&ProductId::new("p-1")));
    }
}
