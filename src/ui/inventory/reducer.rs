//! Reducer for the inventory state.

use crate::ui::filter::filter;
use crate::ui::mvi::Reducer;

use super::intent::{DraftEdit, InventoryIntent};
use super::state::InventoryState;

/// Reducer for inventory state transitions.
///
/// Pure function: network calls, confirmations and notifications are
/// handled by the mutation coordinator around the dispatch call.
pub struct InventoryReducer;

impl Reducer for InventoryReducer {
    type State = InventoryState;
    type Intent = InventoryIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            InventoryIntent::ReplaceSnapshot { products } => {
                state.snapshot = products;
                refresh_view(&mut state);
            }

            InventoryIntent::SetSearchQuery { query } => {
                state.query = query;
                refresh_view(&mut state);
            }

            InventoryIntent::SetCategoryFilter { category } => {
                state.category_filter = category;
            }

            InventoryIntent::BeginCreate | InventoryIntent::ClearDraft => {
                state.draft = Default::default();
                state.editing_id = None;
            }

            InventoryIntent::BeginEdit { product } => {
                state.draft = (&product).into();
                state.editing_id = Some(product.id);
            }

            InventoryIntent::EditDraft(edit) => {
                let draft = &mut state.draft;
                match edit {
                    DraftEdit::Name(name) => draft.name = name,
                    DraftEdit::Quantity(quantity) => draft.quantity = quantity,
                    DraftEdit::Price(price) => draft.price = price,
                    DraftEdit::InStock(in_stock) => draft.in_stock = in_stock,
                    DraftEdit::ToggleInStock => draft.in_stock = !draft.in_stock,
                    DraftEdit::Category(category) => draft.category = category,
                }
            }

            InventoryIntent::ToggleSelected { id } => {
                if !state.selection.remove(&id) && state.view.iter().any(|p| p.id == id) {
                    state.selection.insert(id);
                }
            }

            InventoryIntent::Deselect { id } => {
                state.selection.remove(&id);
            }

            InventoryIntent::SelectAll => {
                if state.all_selected() {
                    state.selection.clear();
                } else {
                    state.selection = state.view.iter().map(|p| p.id.clone()).collect();
                }
            }

            InventoryIntent::ClearSelection => state.selection.clear(),

            InventoryIntent::RequestStarted => {
                state.request.is_loading = true;
                state.request.error = None;
            }

            InventoryIntent::RequestFailed { message } => {
                state.request.error = Some(message);
            }

            InventoryIntent::RequestFinished => state.request.is_loading = false,
        }
        state
    }
}

/// Re-derive the view and drop selected ids that fell out of it.
fn refresh_view(state: &mut InventoryState) {
    state.view = filter(&state.snapshot, &state.query, state.scope);
    let view = &state.view;
    state
        .selection
        .retain(|id| view.iter().any(|product| &product.id == id));
}
