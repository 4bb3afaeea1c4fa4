//! Shared test utilities and test doubles.

#![allow(dead_code, unused_imports)]

pub mod fake_api;
pub mod mock_backend;

use std::sync::Arc;
use std::thread::{self, ThreadId};

use inventory_console::model::{Category, Product, ProductId};
use inventory_console::ui::coordinator::MutationCoordinator;
use inventory_console::ui::interaction::{Interaction, Notice};
use inventory_console::ui::inventory::InventoryStore;
use parking_lot::Mutex;

use fake_api::FakeApi;

pub fn product(id: u64, name: &str, category: Option<Category>) -> Product {
    Product {
        id: ProductId::Number(id),
        name: name.to_string(),
        quantity: 5,
        price: 9.99,
        in_stock: true,
        category,
    }
}

pub fn widget() -> Product {
    product(1, "Widget", Some(Category::PcParts))
}

pub fn ids(products: &[Product]) -> Vec<ProductId> {
    products.iter().map(|p| p.id.clone()).collect()
}

// -- Interaction double -------------------------------------------------------

/// Answers every confirmation with a fixed value and records what it saw.
pub struct ScriptedInteraction {
    answer: bool,
    prompts: Mutex<Vec<String>>,
    prompt_threads: Mutex<Vec<ThreadId>>,
    notices: Mutex<Vec<Notice>>,
}

impl ScriptedInteraction {
    pub fn answering(answer: bool) -> Arc<Self> {
        Arc::new(Self {
            answer,
            prompts: Mutex::new(Vec::new()),
            prompt_threads: Mutex::new(Vec::new()),
            notices: Mutex::new(Vec::new()),
        })
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().clone()
    }

    /// Threads each confirmation was answered on.
    pub fn prompt_threads(&self) -> Vec<ThreadId> {
        self.prompt_threads.lock().clone()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().clone()
    }
}

impl Interaction for ScriptedInteraction {
    fn confirm(&self, message: &str) -> bool {
        self.prompts.lock().push(message.to_string());
        self.prompt_threads.lock().push(thread::current().id());
        self.answer
    }

    fn notify(&self, notice: Notice) {
        self.notices.lock().push(notice);
    }
}

// -- Composite builders -------------------------------------------------------

/// Build a coordinator over a fake API seeded with `products`.
///
/// Returns `(coordinator, api, interaction)`.
pub fn make_coordinator(
    products: Vec<Product>,
    confirm: bool,
) -> (MutationCoordinator, Arc<FakeApi>, Arc<ScriptedInteraction>) {
    let api = Arc::new(FakeApi::with_products(products));
    let interaction = ScriptedInteraction::answering(confirm);
    let coordinator = MutationCoordinator::new(
        api.clone(),
        interaction.clone(),
        InventoryStore::default(),
    );
    (coordinator, api, interaction)
}
