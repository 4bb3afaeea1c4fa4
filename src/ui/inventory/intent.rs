//! Intents for the inventory state.

use crate::model::{Category, Product, ProductId};
use crate::ui::mvi::Intent;

/// Change to a single field of the edit draft.
#[derive(Debug, Clone, PartialEq)]
pub enum DraftEdit {
    Name(String),
    Quantity(u32),
    Price(f64),
    InStock(bool),
    ToggleInStock,
    Category(Option<Category>),
}

/// Intents that can be dispatched to the inventory reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum InventoryIntent {
    /// A fetch succeeded; replace the snapshot wholesale.
    ReplaceSnapshot { products: Vec<Product> },

    SetSearchQuery { query: String },

    /// Record the server-side category filter. Does not refetch.
    SetCategoryFilter { category: Option<Category> },

    /// Start composing a new product.
    BeginCreate,

    /// Start editing a copy of an existing product.
    BeginEdit { product: Product },

    /// Drop the draft and leave edit mode.
    ClearDraft,

    EditDraft(DraftEdit),

    /// Select or deselect one product in the displayed view.
    ToggleSelected { id: ProductId },

    /// Remove one id from the selection if present.
    Deselect { id: ProductId },

    /// Select the whole displayed view, or clear it when already fully selected.
    SelectAll,

    ClearSelection,

    /// A network call is starting: set loading, clear the last error.
    RequestStarted,

    RequestFailed { message: String },

    /// The network call is over, whatever its outcome.
    RequestFinished,
}

impl Intent for InventoryIntent {}
