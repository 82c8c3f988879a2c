//! Presentation boundary: what the controller tells the window to show.
//!
//! These types carry display strings only, so any toolkit (native widgets,
//! a webview, a test double) can render them without touching the domain.

use serde::{Deserialize, Serialize};

use stockdesk_core::ValidationError;
use stockdesk_inventory::{InventoryStore, Product};

/// Column headers of the inventory table, in display order.
pub const TABLE_HEADERS: [&str; 4] = ["Name", "Quantity", "Price", "Category"];

/// One rendered row of the inventory table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    pub name: String,
    pub quantity: String,
    pub price: String,
    pub category: String,
}

impl TableRow {
    pub fn from_product(product: &Product, currency_prefix: &str) -> Self {
        Self {
            name: product.name().to_string(),
            quantity: product.quantity().to_string(),
            price: product.price().format_currency(currency_prefix),
            category: product.category().to_string(),
        }
    }

    /// Cell texts in [`TABLE_HEADERS`] order.
    pub fn cells(&self) -> [&str; 4] {
        [&self.name, &self.quantity, &self.price, &self.category]
    }
}

/// Render every product in the store, one row each, in store order.
pub fn project_rows(store: &InventoryStore, currency_prefix: &str) -> Vec<TableRow> {
    store
        .iter()
        .map(|product| TableRow::from_product(product, currency_prefix))
        .collect()
}

/// A warning dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    /// Warning shown for a rejected add submission.
    pub fn invalid_input(err: &ValidationError) -> Self {
        let message = match err {
            ValidationError::InvalidQuantity { input } => {
                format!("Quantity must be a whole number, got {input:?}.")
            }
            ValidationError::InvalidPrice { input } => {
                format!("Price must be a decimal number, got {input:?}.")
            }
        };
        Self::new("Invalid input", message)
    }
}

/// Calls the controller makes into the window.
pub trait InventoryView {
    /// Replace every table row with `rows`.
    fn refresh_table(&mut self, rows: &[TableRow]);

    /// Show one warning dialog.
    fn show_warning(&mut self, alert: &Alert);

    /// Reset the four input fields to empty text.
    fn clear_fields(&mut self);
}

impl<V: InventoryView + ?Sized> InventoryView for &mut V {
    fn refresh_table(&mut self, rows: &[TableRow]) {
        (**self).refresh_table(rows)
    }

    fn show_warning(&mut self, alert: &Alert) {
        (**self).show_warning(alert)
    }

    fn clear_fields(&mut self) {
        (**self).clear_fields()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockdesk_core::{Price, Quantity};

    fn product(name: &str, quantity: u64, price: &str, category: &str) -> Product {
        Product::new(name, Quantity::new(quantity), Price::parse(price).unwrap(), category)
    }

    #[test]
    fn row_formats_price_as_currency() {
        let row = TableRow::from_product(&product("Produto A", 10, "20.50", "Categoria 1"), "R$");
        assert_eq!(row.cells(), ["Produto A", "10", "R$ 20.50", "Categoria 1"]);
    }

    #[test]
    fn project_rows_mirrors_store_order() {
        let mut store = InventoryStore::new();
        store.add(product("b", 1, "2", "x"));
        store.add(product("a", 3, "4.5", "y"));

        let rows = project_rows(&store, "€");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].cells(), ["b", "1", "€ 2.00", "x"]);
        assert_eq!(rows[1].cells(), ["a", "3", "€ 4.50", "y"]);
    }

    #[test]
    fn project_rows_of_empty_store_is_empty() {
        assert!(project_rows(&InventoryStore::new(), "R$").is_empty());
    }

    #[test]
    fn alert_names_the_rejected_field() {
        let alert = Alert::invalid_input(&ValidationError::invalid_quantity("abc"));
        assert_eq!(alert.title, "Invalid input");
        assert!(alert.message.starts_with("Quantity"));
        assert!(alert.message.contains("\"abc\""));

        let alert = Alert::invalid_input(&ValidationError::invalid_price("vinte"));
        assert!(alert.message.starts_with("Price"));
    }

    #[test]
    fn row_serializes_display_strings() {
        let row = TableRow::from_product(&product("Produto A", 10, "20.50", "Categoria 1"), "R$");
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Produto A",
                "quantity": "10",
                "price": "R$ 20.50",
                "category": "Categoria 1",
            })
        );
    }

    #[test]
    fn headers_match_cell_count() {
        let row = TableRow::from_product(&product("n", 0, "0", ""), "R$");
        assert_eq!(row.cells().len(), TABLE_HEADERS.len());
    }
}
