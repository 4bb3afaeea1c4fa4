//! State for the inventory screen.

use std::collections::BTreeSet;

use crate::model::{Category, Product, ProductDraft, ProductId};
use crate::ui::filter::SearchScope;
use crate::ui::mvi::UiState;

/// Network request flags.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RequestState {
    /// True while a fetch, save or delete is outstanding.
    pub is_loading: bool,
    /// Message of the last failure; cleared when a new request starts.
    pub error: Option<String>,
}

/// Everything the inventory view renders.
///
/// Fields are only written by [`InventoryReducer`](super::InventoryReducer),
/// which keeps `view` derived from `snapshot` and `query`, and `selection`
/// a subset of the ids in `view`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InventoryState {
    pub(super) snapshot: Vec<Product>,
    pub(super) view: Vec<Product>,
    pub(super) query: String,
    pub(super) scope: SearchScope,
    pub(super) category_filter: Option<Category>,
    pub(super) draft: ProductDraft,
    pub(super) editing_id: Option<ProductId>,
    pub(super) selection: BTreeSet<ProductId>,
    pub(super) request: RequestState,
}

impl UiState for InventoryState {}

impl InventoryState {
    pub fn new(scope: SearchScope) -> Self {
        Self {
            scope,
            ..Self::default()
        }
    }

    /// Product list from the last successful fetch.
    pub fn snapshot(&self) -> &[Product] {
        &self.snapshot
    }

    /// Snapshot narrowed by the search query.
    pub fn view(&self) -> &[Product] {
        &self.view
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn category_filter(&self) -> Option<Category> {
        self.category_filter
    }

    pub fn draft(&self) -> &ProductDraft {
        &self.draft
    }

    /// Id of the product being edited; `None` in create mode.
    pub fn editing_id(&self) -> Option<&ProductId> {
        self.editing_id.as_ref()
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    pub fn selection(&self) -> &BTreeSet<ProductId> {
        &self.selection
    }

    pub fn is_selected(&self, id: &ProductId) -> bool {
        self.selection.contains(id)
    }

    /// True when the view is non-empty and every product in it is selected.
    pub fn all_selected(&self) -> bool {
        !self.view.is_empty() && self.view.iter().all(|p| self.selection.contains(&p.id))
    }

    pub fn request(&self) -> &RequestState {
        &self.request
    }

    pub fn find(&self, id: &ProductId) -> Option<&Product> {
        self.snapshot.iter().find(|p| &p.id == id)
    }
}
