//! Inventory feature module.
//!
//! Holds the product snapshot, the filtered view, the edit draft, the
//! bulk-delete selection and the request flags.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Inventory state and its read accessors
//! - `intent.rs` - User actions and request lifecycle events
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `store.rs` - Shared handle that dispatches intents through the reducer

mod intent;
mod reducer;
mod state;
mod store;

pub use intent::{DraftEdit, InventoryIntent};
pub use reducer::InventoryReducer;
pub use state::{InventoryState, RequestState};
pub use store::InventoryStore;
