//! # Products Screen
//!
//! Catalog list plus the create/edit form.
//!
//! ## Edit Mode
//! ```text
//!            select_for_edit(p)
//!   ┌──────────┐ ───────────────► ┌──────────────┐
//!   │ Creating │                  │ Editing(id)  │
//!   └──────────┘ ◄─────────────── └──────────────┘
//!        │         submit() ok          │
//!        │                              │ submit() err: stays Editing
//!        ▼ submit(): create             ▼ submit(): update id
//! ```

use tracing::debug;

use wings_core::{
    CoreError, CoreResult, EditMode, ImageUpload, Product, ProductDraft, RecordId,
};

use super::Api;
use crate::error::connection_aware_message;

pub struct ProductsScreen {
    api: Api,
    products: Vec<Product>,
    draft: ProductDraft,
    image: Option<ImageUpload>,
    mode: EditMode,
    error: Option<String>,
}

impl ProductsScreen {
    pub fn new(api: Api) -> Self {
        ProductsScreen {
            api,
            products: Vec::new(),
            draft: ProductDraft::default(),
            image: None,
            mode: EditMode::Creating,
            error: None,
        }
    }

    pub async fn load(&mut self) {
        match self.api.list_products().await {
            Ok(products) => self.products = products,
            Err(e) => self.error = Some(connection_aware_message(&e)),
        }
    }

    /// Switches to editing `product` and prefills the form from it.
    pub fn select_for_edit(&mut self, product: &Product) {
        debug!(id = %product.id, "Editing product");
        self.mode = EditMode::Editing(product.id.clone());
        self.draft = ProductDraft::from_product(product);
        self.image = None;
    }

    /// [`select_for_edit`](Self::select_for_edit) by id from the loaded list.
    pub fn select_by_id(&mut self, id: &RecordId) -> CoreResult<()> {
        let product = self
            .products
            .iter()
            .find(|p| &p.id == id)
            .cloned()
            .ok_or_else(|| CoreError::NotInSnapshot {
                entity: "Product",
                id: id.to_string(),
            })?;
        self.select_for_edit(&product);
        Ok(())
    }

    pub fn draft_mut(&mut self) -> &mut ProductDraft {
        &mut self.draft
    }

    /// Attaches an image file to the next submit.
    pub fn set_image(&mut self, image: Option<ImageUpload>) {
        self.image = image;
    }

    /// Creates or updates depending on the edit mode. Returns true on success.
    pub async fn submit(&mut self) -> bool {
        let payload = self.draft.to_payload();
        let image = self.image.as_ref();
        let result = match &self.mode {
            EditMode::Creating => self.api.create_product(&payload, image).await,
            EditMode::Editing(id) => self.api.update_product(id, &payload, image).await,
        };

        match result {
            Ok(saved) => {
                debug!(id = %saved.id, "Product saved");
                self.mode = EditMode::Creating;
                self.draft = ProductDraft::default();
                self.image = None;
                self.error = None;
                self.load().await;
                true
            }
            Err(e) => {
                self.error = Some(connection_aware_message(&e));
                false
            }
        }
    }

    pub async fn delete(&mut self, id: &RecordId) -> bool {
        match self.api.delete_product(id).await {
            Ok(()) => {
                self.error = None;
                self.load().await;
                true
            }
            Err(e) => {
                self.error = Some(connection_aware_message(&e));
                false
            }
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn draft(&self) -> &ProductDraft {
        &self.draft
    }

    pub fn mode(&self) -> &EditMode {
        &self.mode
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
