//! Inventory front-end core: state, search, mutations and rendering.

pub mod coordinator;
pub mod filter;
pub mod interaction;
pub mod inventory;
pub mod mvi;
pub mod table;
pub mod terminal;
