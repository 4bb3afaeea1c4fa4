//! Client for the remote product collection.
//!
//! [`ProductApi`] is the seam the mutation coordinator talks to.
//! [`HttpProductApi`] is the production implementation over `reqwest`.

mod client;
mod error;

pub use client::HttpProductApi;
pub use error::NetworkError;

use async_trait::async_trait;

use crate::model::{Category, Product, ProductDraft, ProductId};

/// Operations against the remote product collection.
///
/// No call retries; every failure is returned to the caller as-is.
#[async_trait]
pub trait ProductApi: Send + Sync {
    /// Fetch the collection, narrowed server-side to `category` when given.
    async fn list_products(&self, category: Option<Category>) -> Result<Vec<Product>, NetworkError>;

    /// Create a product; the server assigns its id.
    async fn create_product(&self, draft: &ProductDraft) -> Result<Product, NetworkError>;

    /// Replace the fields of an existing product.
    async fn update_product(&self, id: &ProductId, draft: &ProductDraft) -> Result<(), NetworkError>;

    async fn delete_product(&self, id: &ProductId) -> Result<(), NetworkError>;
}
