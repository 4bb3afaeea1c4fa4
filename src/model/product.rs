use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::category::{self, Category};

/// Server-assigned product identifier.
///
/// Opaque to the client: the API may hand out numeric or string ids, and
/// whichever form arrives is sent back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    Number(u64),
    Text(String),
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductId::Number(n) => write!(f, "{}", n),
            ProductId::Text(s) => f.write_str(s),
        }
    }
}

/// Digits-only input is numeric so it matches ids the API sent as JSON
/// numbers.
impl FromStr for ProductId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.parse::<u64>() {
            Ok(n) => ProductId::Number(n),
            Err(_) => ProductId::Text(s.to_string()),
        })
    }
}

/// A product as held by the remote inventory API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub quantity: u32,
    pub price: f64,
    pub in_stock: bool,
    #[serde(default, with = "category::optional")]
    pub category: Option<Category>,
}

impl Product {
    /// Price with two decimals and the currency prefix, e.g. `P9.99`.
    pub fn display_price(&self) -> String {
        format!("P{:.2}", self.price)
    }

    pub fn stock_label(&self) -> &'static str {
        if self.in_stock {
            "In Stock"
        } else {
            "Out of Stock"
        }
    }
}

/// Errors from client-side draft validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("Product name is required")]
    EmptyName,

    #[error("Product category is required")]
    MissingCategory,

    #[error("Price must be a non-negative number")]
    InvalidPrice,
}

/// Editable fields of a product, sent as the body of create and update calls.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub name: String,
    pub quantity: u32,
    pub price: f64,
    pub in_stock: bool,
    #[serde(default, with = "category::optional")]
    pub category: Option<Category>,
}

impl ProductDraft {
    /// Checks the fields the entry form marks as required.
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.name.trim().is_empty() {
            return Err(DraftError::EmptyName);
        }
        if self.category.is_none() {
            return Err(DraftError::MissingCategory);
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(DraftError::InvalidPrice);
        }
        Ok(())
    }
}

impl From<&Product> for ProductDraft {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            quantity: product.quantity,
            price: product.price,
            in_stock: product.in_stock,
            category: product.category,
        }
    }
}
