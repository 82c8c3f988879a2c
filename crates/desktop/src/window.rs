//! Headless inventory window.
//!
//! Holds the widget state a real window would (four text fields, the table,
//! the selection, dialogs shown) and wires the buttons to [`FormController`].
//! A toolkit binding only has to copy this state to and from its widgets.

use stockdesk_inventory::Product;

use crate::config::DesktopConfig;
use crate::controller::{AddOutcome, FormController, RemoveOutcome};
use crate::form::ProductForm;
use crate::view::{Alert, InventoryView, TableRow};

/// Widget state of the window.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WindowState {
    pub fields: ProductForm,
    pub rows: Vec<TableRow>,
    pub selection: Option<usize>,
    pub alerts: Vec<Alert>,
}

impl InventoryView for WindowState {
    fn refresh_table(&mut self, rows: &[TableRow]) {
        self.rows = rows.to_vec();
        // Repopulating the table drops the selection.
        self.selection = None;
    }

    fn show_warning(&mut self, alert: &Alert) {
        self.alerts.push(alert.clone());
    }

    fn clear_fields(&mut self) {
        self.fields.clear();
    }
}

#[derive(Debug, Clone)]
pub struct HeadlessWindow {
    controller: FormController,
    state: WindowState,
}

impl HeadlessWindow {
    pub fn new(config: DesktopConfig) -> Self {
        Self {
            controller: FormController::new(config),
            state: WindowState::default(),
        }
    }

    pub fn fields(&self) -> &ProductForm {
        &self.state.fields
    }

    pub fn fields_mut(&mut self) -> &mut ProductForm {
        &mut self.state.fields
    }

    /// Type into all four fields at once.
    pub fn fill(
        &mut self,
        name: impl Into<String>,
        quantity: impl Into<String>,
        price: impl Into<String>,
        category: impl Into<String>,
    ) {
        self.state.fields = ProductForm::new(name, quantity, price, category);
    }

    pub fn click_add(&mut self) -> AddOutcome {
        let form = self.state.fields.clone();
        self.controller.submit_add(&form, &mut self.state)
    }

    /// Select a table row. Rows that do not exist cannot be selected.
    pub fn select_row(&mut self, index: usize) -> bool {
        if index < self.state.rows.len() {
            self.state.selection = Some(index);
            true
        } else {
            false
        }
    }

    pub fn clear_selection(&mut self) {
        self.state.selection = None;
    }

    pub fn selected_row(&self) -> Option<usize> {
        self.state.selection
    }

    pub fn click_remove(&mut self) -> RemoveOutcome {
        let selection = self.state.selection;
        self.controller.remove_selected(selection, &mut self.state)
    }

    pub fn row_count(&self) -> usize {
        self.state.rows.len()
    }

    pub fn row(&self, index: usize) -> Option<&TableRow> {
        self.state.rows.get(index)
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.state.rows
    }

    /// Every warning shown so far, oldest first.
    pub fn alerts(&self) -> &[Alert] {
        &self.state.alerts
    }

    pub fn products(&self) -> &[Product] {
        self.controller.store().products()
    }

    pub fn controller(&self) -> &FormController {
        &self.controller
    }
}

impl Default for HeadlessWindow {
    fn default() -> Self {
        Self::new(DesktopConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refresh_drops_selection() {
        let mut state = WindowState {
            selection: Some(0),
            ..WindowState::default()
        };
        state.refresh_table(&[]);
        assert_eq!(state.selection, None);
    }

    #[test]
    fn select_row_rejects_missing_rows() {
        let mut window = HeadlessWindow::default();
        assert!(!window.select_row(0));
        assert_eq!(window.selected_row(), None);

        window.fill("a", "1", "1", "x");
        window.click_add();
        assert!(window.select_row(0));
        assert_eq!(window.selected_row(), Some(0));

        window.clear_selection();
        assert_eq!(window.selected_row(), None);
    }

    #[test]
    fn fields_mut_edits_single_field() {
        let mut window = HeadlessWindow::default();
        window.fields_mut().name = "Produto".to_string();
        assert_eq!(window.fields().name, "Produto");
        assert!(window.fields().quantity.is_empty());
    }
}
