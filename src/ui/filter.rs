//! Free-text product search.

use serde::{Deserialize, Serialize};

use crate::model::Product;

/// Product fields the search text is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchScope {
    #[default]
    Name,
    NameAndCategory,
}

/// Returns the products whose searched fields contain `query`, ignoring case.
///
/// An empty or whitespace-only query returns every product. Order is
/// preserved and the input is left untouched.
pub fn filter(products: &[Product], query: &str, scope: SearchScope) -> Vec<Product> {
    if query.trim().is_empty() {
        return products.to_vec();
    }

    let needle = query.to_lowercase();
    products
        .iter()
        .filter(|product| matches(product, &needle, scope))
        .cloned()
        .collect()
}

fn matches(product: &Product, needle: &str, scope: SearchScope) -> bool {
    if product.name.to_lowercase().contains(needle) {
        return true;
    }
    match scope {
        SearchScope::Name => false,
        SearchScope::NameAndCategory => product
            .category
            .is_some_and(|category| category.as_str().to_lowercase().contains(needle)),
    }
}
