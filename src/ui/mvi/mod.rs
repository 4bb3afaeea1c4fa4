//! Model-View-Intent (MVI) architecture primitives.
//!
//! This module provides base traits for implementing unidirectional
//! data flow between the inventory front end and its state.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: Plain value holding everything the view renders
//! - **Intent**: User actions or request lifecycle events
//! - **Reducer**: Pure function that transforms state based on intents
//!
//! Network calls never happen inside a reducer; the mutation coordinator
//! performs them and dispatches the resulting intents.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
