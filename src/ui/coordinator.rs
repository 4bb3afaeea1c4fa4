//! Network-backed inventory operations.
//!
//! The coordinator is the only place that talks to the [`ProductApi`]. Each
//! operation brackets its calls with `RequestStarted`/`RequestFinished`,
//! turns failures into a user-facing `error` message, and refetches the
//! whole product list after a successful mutation instead of patching the
//! snapshot locally.

use std::collections::BTreeSet;
use std::sync::Arc;

use scopeguard::ScopeGuard;
use thiserror::Error;
use tokio::task::JoinSet;

use crate::api::{NetworkError, ProductApi};
use crate::model::{Category, DraftError, ProductId};
use crate::ui::interaction::{Interaction, Notice};
use crate::ui::inventory::{InventoryIntent, InventoryStore};

const FETCH_FAILED: &str = "Failed to fetch products. Please try again later.";
const SAVE_FAILED: &str = "Failed to save product. Please try again later.";
const SAVE_FAILED_NOTICE: &str = "Error saving product. Please try again.";
const DELETE_FAILED: &str = "Failed to delete product. Please try again later.";
const DELETE_FAILED_NOTICE: &str = "Error deleting product. Please try again.";
const BULK_DELETE_FAILED: &str = "Failed to delete some selected products. Please try again later.";
const CONFIRM_DELETE: &str = "Are you sure you want to delete this product?";

/// Errors returned by coordinator operations.
#[derive(Debug, Error)]
pub enum MutationError {
    #[error(transparent)]
    Network(#[from] NetworkError),

    #[error("Invalid product: {0}")]
    InvalidDraft(#[from] DraftError),

    /// Another request is still outstanding; nothing was done.
    #[error("Another request is still in progress")]
    Busy,

    #[error("Failed to delete {} of {attempted} products", .failed.len())]
    BulkDelete {
        failed: Vec<ProductId>,
        attempted: usize,
    },

    #[error("Product '{0}' not found")]
    NotFound(ProductId),
}

/// How a mutation that did not fail ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    Completed,
    /// The user answered no to the confirmation prompt.
    Declined,
    /// Bulk delete with an empty selection.
    NothingSelected,
}

pub struct MutationCoordinator {
    api: Arc<dyn ProductApi>,
    interaction: Arc<dyn Interaction>,
    store: InventoryStore,
}

impl MutationCoordinator {
    pub fn new(
        api: Arc<dyn ProductApi>,
        interaction: Arc<dyn Interaction>,
        store: InventoryStore,
    ) -> Self {
        Self {
            api,
            interaction,
            store,
        }
    }

    pub fn store(&self) -> &InventoryStore {
        &self.store
    }

    /// Fetch the product list for the active category filter.
    pub async fn refetch(&self) -> Result<(), MutationError> {
        let _request = self.begin_request()?;
        self.fetch_snapshot().await
    }

    /// Change the server-side category filter and refetch.
    pub async fn set_category_filter(
        &self,
        category: Option<Category>,
    ) -> Result<(), MutationError> {
        let _request = self.begin_request()?;
        self.store
            .dispatch(InventoryIntent::SetCategoryFilter { category });
        self.fetch_snapshot().await
    }

    /// Start editing the product with `id` from the current snapshot.
    pub fn edit(&self, id: &ProductId) -> Result<(), MutationError> {
        let product = self
            .store
            .read(|state| state.find(id).cloned())
            .ok_or_else(|| MutationError::NotFound(id.clone()))?;
        self.store.dispatch(InventoryIntent::BeginEdit { product });
        Ok(())
    }

    /// Create or update from the current draft.
    ///
    /// On failure the draft is kept so the user can retry.
    pub async fn save(&self) -> Result<MutationOutcome, MutationError> {
        let _request = self.begin_request()?;
        let (draft, editing_id) = self
            .store
            .read(|state| (state.draft().clone(), state.editing_id().cloned()));

        if let Err(err) = draft.validate() {
            self.store.dispatch(InventoryIntent::RequestFailed {
                message: err.to_string(),
            });
            self.interaction.notify(Notice::Error(err.to_string()));
            return Err(err.into());
        }

        let result = match &editing_id {
            Some(id) => self
                .api
                .update_product(id, &draft)
                .await
                .map(|()| "Product updated successfully!"),
            None => self
                .api
                .create_product(&draft)
                .await
                .map(|_| "Product added successfully!"),
        };

        match result {
            Ok(message) => {
                tracing::info!(
                    id = ?editing_id,
                    name = %draft.name,
                    "Product saved"
                );
                self.interaction.notify(Notice::Success(message.to_string()));
                self.store.dispatch(InventoryIntent::ClearDraft);
                self.fetch_snapshot().await?;
                Ok(MutationOutcome::Completed)
            }
            Err(err) => {
                tracing::warn!(
                    id = ?editing_id,
                    kind = err.kind(),
                    error = %err,
                    "Saving product failed"
                );
                self.store.dispatch(InventoryIntent::RequestFailed {
                    message: SAVE_FAILED.to_string(),
                });
                self.interaction
                    .notify(Notice::Error(SAVE_FAILED_NOTICE.to_string()));
                Err(err.into())
            }
        }
    }

    /// Delete one product after the user confirms.
    pub async fn remove(&self, id: &ProductId) -> Result<MutationOutcome, MutationError> {
        self.ensure_idle()?;
        if !self.confirm(CONFIRM_DELETE.to_string()).await {
            return Ok(MutationOutcome::Declined);
        }

        let _request = self.begin_request()?;
        match self.api.delete_product(id).await {
            Ok(()) => {
                tracing::info!(id = %id, "Product deleted");
                self.store
                    .dispatch(InventoryIntent::Deselect { id: id.clone() });
                self.fetch_snapshot().await?;
                Ok(MutationOutcome::Completed)
            }
            Err(err) => {
                tracing::warn!(id = %id, kind = err.kind(), error = %err, "Deleting product failed");
                self.store.dispatch(InventoryIntent::RequestFailed {
                    message: DELETE_FAILED.to_string(),
                });
                self.interaction
                    .notify(Notice::Error(DELETE_FAILED_NOTICE.to_string()));
                Err(err.into())
            }
        }
    }

    /// Delete every selected product after the user confirms.
    ///
    /// Deletes run concurrently and are all awaited. If any fails the list
    /// is still refetched, so the snapshot shows what the server now holds,
    /// and the selection is left as the refetch prunes it.
    pub async fn remove_selected(&self) -> Result<MutationOutcome, MutationError> {
        self.ensure_idle()?;
        let ids: Vec<ProductId> = self
            .store
            .read(|state| state.selection().iter().cloned().collect());
        if ids.is_empty() {
            return Ok(MutationOutcome::NothingSelected);
        }

        let prompt = format!(
            "Are you sure you want to delete {} selected products?",
            ids.len()
        );
        if !self.confirm(prompt).await {
            return Ok(MutationOutcome::Declined);
        }

        let _request = self.begin_request()?;
        let mut tasks = JoinSet::new();
        for id in ids.iter().cloned() {
            let api = Arc::clone(&self.api);
            tasks.spawn(async move {
                let result = api.delete_product(&id).await;
                (id, result)
            });
        }

        let mut deleted = BTreeSet::new();
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((id, Ok(()))) => {
                    deleted.insert(id);
                }
                Ok((id, Err(err))) => {
                    tracing::warn!(id = %id, kind = err.kind(), error = %err, "Bulk delete item failed");
                }
                Err(err) => tracing::warn!(error = %err, "Bulk delete task did not complete"),
            }
        }

        let failed: Vec<ProductId> = ids
            .iter()
            .filter(|id| !deleted.contains(*id))
            .cloned()
            .collect();

        if failed.is_empty() {
            tracing::info!(count = ids.len(), "Selected products deleted");
            self.store.dispatch(InventoryIntent::ClearSelection);
            self.fetch_snapshot().await?;
            return Ok(MutationOutcome::Completed);
        }

        // Refetch anyway; part of the batch may be gone.
        if let Err(err) = self.fetch_snapshot().await {
            tracing::warn!(error = %err, "Refetch after failed bulk delete failed");
        }
        self.store.dispatch(InventoryIntent::RequestFailed {
            message: BULK_DELETE_FAILED.to_string(),
        });
        self.interaction
            .notify(Notice::Error(DELETE_FAILED_NOTICE.to_string()));
        Err(MutationError::BulkDelete {
            failed,
            attempted: ids.len(),
        })
    }

    /// Ask the user on the blocking pool; `Interaction::confirm` may wait on
    /// stdin.
    async fn confirm(&self, message: String) -> bool {
        let interaction = Arc::clone(&self.interaction);
        match tokio::task::spawn_blocking(move || interaction.confirm(&message)).await {
            Ok(answer) => answer,
            Err(err) => {
                tracing::warn!(error = %err, "Confirmation prompt did not complete");
                false
            }
        }
    }

    fn ensure_idle(&self) -> Result<(), MutationError> {
        if self.store.read(|state| state.request().is_loading) {
            return Err(MutationError::Busy);
        }
        Ok(())
    }

    /// Mark a request as started; the returned guard finishes it on drop.
    fn begin_request(
        &self,
    ) -> Result<ScopeGuard<InventoryStore, impl FnOnce(InventoryStore)>, MutationError> {
        if !self.store.try_begin_request() {
            tracing::debug!("Rejected operation while another request is in flight");
            return Err(MutationError::Busy);
        }
        Ok(scopeguard::guard(self.store.clone(), |store| {
            store.dispatch(InventoryIntent::RequestFinished)
        }))
    }

    /// List products for the current category filter into the snapshot.
    ///
    /// Runs inside an already started request.
    async fn fetch_snapshot(&self) -> Result<(), MutationError> {
        let category = self.store.read(|state| state.category_filter());
        match self.api.list_products(category).await {
            Ok(products) => {
                self.store
                    .dispatch(InventoryIntent::ReplaceSnapshot { products });
                Ok(())
            }
            Err(err) => {
                tracing::warn!(kind = err.kind(), error = %err, "Fetching products failed");
                self.store.dispatch(InventoryIntent::RequestFailed {
                    message: FETCH_FAILED.to_string(),
                });
                Err(err.into())
            }
        }
    }
}
