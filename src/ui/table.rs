//! Plain-text rendering of the inventory view.

use crate::model::Product;
use crate::ui::inventory::InventoryState;

const HEADERS: [&str; 7] = ["#", "Name", "Category", "Quantity", "Price", "In Stock", "Sel"];
const EMPTY: &str = "No products found";

/// Render the displayed view as an aligned table.
///
/// Row numbers are positions in the view, not product ids. The last column
/// marks products in the bulk-delete selection.
pub fn render(state: &InventoryState) -> String {
    if state.view().is_empty() {
        return format!("{}\n", EMPTY);
    }

    let rows: Vec<[String; 7]> = state
        .view()
        .iter()
        .enumerate()
        .map(|(index, product)| row(index, product, state.is_selected(&product.id)))
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &HEADERS.map(str::to_string), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(rule.join("-+-").as_str());
    out.push('\n');
    for row in &rows {
        push_line(&mut out, row, &widths);
    }
    out
}

/// One-line summary of the request flags, if there is anything to show.
pub fn status_line(state: &InventoryState) -> Option<String> {
    let request = state.request();
    match (&request.error, request.is_loading) {
        (Some(error), _) => Some(format!("Error: {}", error)),
        (None, true) => Some("Loading products...".to_string()),
        (None, false) => None,
    }
}

fn row(index: usize, product: &Product, selected: bool) -> [String; 7] {
    [
        (index + 1).to_string(),
        product.name.clone(),
        product
            .category
            .map(|c| c.as_str().to_string())
            .unwrap_or_default(),
        product.quantity.to_string(),
        product.display_price(),
        product.stock_label().to_string(),
        if selected { "x" } else { "" }.to_string(),
    ]
}

fn push_line(out: &mut String, cells: &[String; 7], widths: &[usize; 7]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect();
    out.push_str(padded.join(" | ").trim_end());
    out.push('\n');
}
