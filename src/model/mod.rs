//! Product data model shared by the API client and the inventory store.

mod category;
mod product;

pub use category::{Category, ParseCategoryError};
pub use product::{DraftError, Product, ProductDraft, ProductId};
