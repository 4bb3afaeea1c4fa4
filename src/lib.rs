//! Product inventory client.
//!
//! Keeps a local copy of a remote product collection in sync with a REST API:
//! search and category filtering, a create/edit draft, bulk selection, and
//! single or bulk deletion. State transitions are pure reducers
//! ([`ui::inventory`]); network work is orchestrated by
//! [`ui::coordinator::MutationCoordinator`].

pub mod api;
pub mod config;
pub mod logging;
pub mod model;
pub mod ui;
