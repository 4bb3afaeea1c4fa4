use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};

use inventory_console::api::HttpProductApi;
use inventory_console::config::Config;
use inventory_console::logging::init_tracing;
use inventory_console::model::{Category, ProductId};
use inventory_console::ui::coordinator::{MutationCoordinator, MutationOutcome};
use inventory_console::ui::inventory::{DraftEdit, InventoryIntent, InventoryState, InventoryStore};
use inventory_console::ui::table;
use inventory_console::ui::terminal::TerminalInteraction;

#[derive(Debug, Parser)]
#[command(name = "inventory", version, about = "Manage a remote product inventory")]
struct Cli {
    /// Path to config.toml (default: platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the product collection URL
    #[arg(long, global = true)]
    url: Option<String>,

    /// Answer yes to delete confirmations
    #[arg(short = 'y', long, global = true)]
    yes: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show products as a table
    List {
        /// Only fetch products in this category
        #[arg(long)]
        category: Option<Category>,
        /// Case-insensitive search text
        #[arg(long)]
        search: Option<String>,
    },
    /// Create a product
    Add {
        #[arg(long)]
        name: String,
        #[arg(long, default_value_t = 0)]
        quantity: u32,
        #[arg(long, default_value_t = 0.0)]
        price: f64,
        #[arg(long)]
        in_stock: bool,
        #[arg(long)]
        category: Option<Category>,
    },
    /// Change fields of an existing product
    Edit {
        id: ProductId,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        quantity: Option<u32>,
        #[arg(long)]
        price: Option<f64>,
        #[arg(long)]
        in_stock: Option<bool>,
        #[arg(long)]
        category: Option<Category>,
    },
    /// Delete one product
    Delete { id: ProductId },
    /// Delete several products at once
    DeleteMany {
        #[arg(required = true)]
        ids: Vec<ProductId>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(url) = cli.url {
        config.api.collection_url = url;
        config.validate()?;
    }

    let api = HttpProductApi::new(&config.api).context("Failed to create API client")?;
    let store = InventoryStore::new(InventoryState::new(config.search.scope));
    let coordinator = MutationCoordinator::new(
        Arc::new(api),
        Arc::new(TerminalInteraction::new(cli.yes)),
        store,
    );

    let result = run(cli.command, &coordinator).await;
    if result.is_err() {
        if let Some(status) = table::status_line(&coordinator.store().state()) {
            eprintln!("{}", status);
        }
    }
    result
}

async fn run(command: Command, coordinator: &MutationCoordinator) -> anyhow::Result<()> {
    let store = coordinator.store();
    match command {
        Command::List { category, search } => {
            match category {
                Some(category) => coordinator.set_category_filter(Some(category)).await?,
                None => coordinator.refetch().await?,
            }
            if let Some(query) = search {
                store.dispatch(InventoryIntent::SetSearchQuery { query });
            }
            print!("{}", table::render(&store.state()));
        }

        Command::Add {
            name,
            quantity,
            price,
            in_stock,
            category,
        } => {
            store.dispatch(InventoryIntent::BeginCreate);
            for edit in [
                DraftEdit::Name(name),
                DraftEdit::Quantity(quantity),
                DraftEdit::Price(price),
                DraftEdit::InStock(in_stock),
                DraftEdit::Category(category),
            ] {
                store.dispatch(InventoryIntent::EditDraft(edit));
            }
            coordinator.save().await?;
        }

        Command::Edit {
            id,
            name,
            quantity,
            price,
            in_stock,
            category,
        } => {
            coordinator.refetch().await?;
            coordinator.edit(&id)?;
            let edits = [
                name.map(DraftEdit::Name),
                quantity.map(DraftEdit::Quantity),
                price.map(DraftEdit::Price),
                in_stock.map(DraftEdit::InStock),
                category.map(|c| DraftEdit::Category(Some(c))),
            ];
            for edit in edits.into_iter().flatten() {
                store.dispatch(InventoryIntent::EditDraft(edit));
            }
            coordinator.save().await?;
        }

        Command::Delete { id } => {
            report(coordinator.remove(&id).await?, "Product deleted.");
        }

        Command::DeleteMany { ids } => {
            coordinator.refetch().await?;
            for id in ids {
                if store.read(|state| state.find(&id).is_none()) {
                    eprintln!("Product '{}' not found, skipping", id);
                    continue;
                }
                store.dispatch(InventoryIntent::ToggleSelected { id });
            }
            report(coordinator.remove_selected().await?, "Selected products deleted.");
        }
    }
    Ok(())
}

fn report(outcome: MutationOutcome, done: &str) {
    match outcome {
        MutationOutcome::Completed => println!("{}", done),
        MutationOutcome::Declined => println!("Cancelled."),
        MutationOutcome::NothingSelected => println!("Nothing to delete."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_delete_many_ids() {
        let cli = Cli::try_parse_from(["inventory", "delete-many", "1", "abc"]).unwrap();
        match cli.command {
            Command::DeleteMany { ids } => {
                assert_eq!(ids, vec![ProductId::Number(1), ProductId::Text("abc".to_string())]);
            }
            other => panic!("Expected DeleteMany, got {:?}", other),
        }
    }

    #[test]
    fn numeric_ids_parse_as_numbers() {
        let cli = Cli::try_parse_from(["inventory", "edit", "7", "--name", "Gadget"]).unwrap();
        match cli.command {
            Command::Edit { id, name, .. } => {
                assert_eq!(id, ProductId::Number(7));
                assert_eq!(name.as_deref(), Some("Gadget"));
            }
            other => panic!("Expected Edit, got {:?}", other),
        }
    }

    #[test]
    fn parses_category_names() {
        let cli = Cli::try_parse_from(["inventory", "list", "--category", "pc-parts"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::List {
                category: Some(Category::PcParts),
                ..
            }
        ));
    }

    #[test]
    fn delete_many_requires_ids() {
        assert!(Cli::try_parse_from(["inventory", "delete-many"]).is_err());
    }
}
