//! Shared handle to the inventory state.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::ui::mvi::Reducer;

use super::intent::InventoryIntent;
use super::reducer::InventoryReducer;
use super::state::InventoryState;

/// Cloneable handle over one [`InventoryState`].
///
/// Every write goes through [`InventoryReducer`]. The lock is held only for
/// the duration of a single reduce or read, never across an `.await`, so a
/// front end can render `is_loading` while a request is in flight.
#[derive(Clone, Default)]
pub struct InventoryStore {
    inner: Arc<Mutex<InventoryState>>,
}

impl InventoryStore {
    pub fn new(state: InventoryState) -> Self {
        Self {
            inner: Arc::new(Mutex::new(state)),
        }
    }

    /// Run the reducer on the current state and store the result.
    pub fn dispatch(&self, intent: InventoryIntent) {
        let mut state = self.inner.lock();
        *state = InventoryReducer::reduce(std::mem::take(&mut *state), intent);
    }

    /// Dispatch `RequestStarted` unless a request is already outstanding.
    ///
    /// Returns false, leaving the state untouched, when busy.
    pub fn try_begin_request(&self) -> bool {
        let mut state = self.inner.lock();
        if state.request().is_loading {
            return false;
        }
        *state =
            InventoryReducer::reduce(std::mem::take(&mut *state), InventoryIntent::RequestStarted);
        true
    }

    /// Read from the current state without cloning it.
    pub fn read<R>(&self, f: impl FnOnce(&InventoryState) -> R) -> R {
        let state = self.inner.lock();
        f(&*state)
    }

    /// Copy of the current state.
    pub fn state(&self) -> InventoryState {
        self.inner.lock().clone()
    }
}
