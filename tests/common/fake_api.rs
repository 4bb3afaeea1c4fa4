//! In-memory product API for coordinator tests.

#![allow(dead_code)]

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use inventory_console::api::{NetworkError, ProductApi};
use inventory_console::model::{Category, Product, ProductDraft, ProductId};
use parking_lot::Mutex;
use tokio::sync::Notify;

/// A call the fake received, in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List(Option<Category>),
    Create(ProductDraft),
    Update(ProductId, ProductDraft),
    Delete(ProductId),
}

#[derive(Default)]
struct FakeState {
    products: Vec<Product>,
    next_id: u64,
    calls: Vec<Call>,
    fail_list: bool,
    fail_save: bool,
    fail_delete: BTreeSet<ProductId>,
}

/// Server double that keeps products in memory and filters by category
/// the way the real API does.
#[derive(Default)]
pub struct FakeApi {
    state: Mutex<FakeState>,
    hold_list: AtomicBool,
    release: Notify,
}

fn server_error() -> NetworkError {
    NetworkError::Status {
        status: 500,
        body: "internal error".to_string(),
    }
}

impl FakeApi {
    pub fn with_products(products: Vec<Product>) -> Self {
        let api = Self::default();
        {
            let mut state = api.state.lock();
            state.next_id = 1000;
            state.products = products;
        }
        api
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().calls.clone()
    }

    pub fn count(&self, matches: impl Fn(&Call) -> bool) -> usize {
        self.state.lock().calls.iter().filter(|c| matches(c)).count()
    }

    pub fn products(&self) -> Vec<Product> {
        self.state.lock().products.clone()
    }

    pub fn fail_list(&self, fail: bool) {
        self.state.lock().fail_list = fail;
    }

    pub fn fail_save(&self, fail: bool) {
        self.state.lock().fail_save = fail;
    }

    pub fn fail_delete_of(&self, id: ProductId) {
        self.state.lock().fail_delete.insert(id);
    }

    /// Make `list_products` wait until [`FakeApi::release_list`] is called.
    pub fn hold_list(&self) {
        self.hold_list.store(true, Ordering::SeqCst);
    }

    pub fn release_list(&self) {
        self.hold_list.store(false, Ordering::SeqCst);
        self.release.notify_one();
    }
}

#[async_trait]
impl ProductApi for FakeApi {
    async fn list_products(&self, category: Option<Category>) -> Result<Vec<Product>, NetworkError> {
        self.state.lock().calls.push(Call::List(category));
        if self.hold_list.load(Ordering::SeqCst) {
            self.release.notified().await;
        }

        let state = self.state.lock();
        if state.fail_list {
            return Err(server_error());
        }
        Ok(state
            .products
            .iter()
            .filter(|p| category.is_none() || p.category == category)
            .cloned()
            .collect())
    }

    async fn create_product(&self, draft: &ProductDraft) -> Result<Product, NetworkError> {
        let mut state = self.state.lock();
        state.calls.push(Call::Create(draft.clone()));
        if state.fail_save {
            return Err(server_error());
        }
        state.next_id += 1;
        let product = Product {
            id: ProductId::Number(state.next_id),
            name: draft.name.clone(),
            quantity: draft.quantity,
            price: draft.price,
            in_stock: draft.in_stock,
            category: draft.category,
        };
        state.products.push(product.clone());
        Ok(product)
    }

    async fn update_product(&self, id: &ProductId, draft: &ProductDraft) -> Result<(), NetworkError> {
        let mut state = self.state.lock();
        state.calls.push(Call::Update(id.clone(), draft.clone()));
        if state.fail_save {
            return Err(server_error());
        }
        let product = state
            .products
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or(NetworkError::Status {
                status: 404,
                body: String::new(),
            })?;
        product.name = draft.name.clone();
        product.quantity = draft.quantity;
        product.price = draft.price;
        product.in_stock = draft.in_stock;
        product.category = draft.category;
        Ok(())
    }

    async fn delete_product(&self, id: &ProductId) -> Result<(), NetworkError> {
        // Yield so concurrent deletes interleave.
        tokio::task::yield_now().await;
        let mut state = self.state.lock();
        state.calls.push(Call::Delete(id.clone()));
        if state.fail_delete.contains(id) {
            return Err(server_error());
        }
        state.products.retain(|p| &p.id != id);
        Ok(())
    }
}
