//! `stockdesk-desktop`
//!
//! **Responsibility:** the inventory window's behavior, minus the widgets.
//!
//! This crate provides:
//! - Form validation and the add/remove handlers ([`FormController`])
//! - The presentation boundary ([`InventoryView`], [`TableRow`], [`Alert`])
//! - A headless window that any toolkit binding can mirror ([`HeadlessWindow`])
//!
//! The toolkit layer is a **thin adapter** around these calls.

pub mod config;
pub mod controller;
pub mod form;
pub mod view;
pub mod window;

pub use config::DesktopConfig;
pub use controller::{AddOutcome, FormController, RemoveOutcome, SubmissionState};
pub use form::ProductForm;
pub use view::{Alert, InventoryView, TABLE_HEADERS, TableRow};
pub use window::{HeadlessWindow, WindowState};

/// Initialize logging, read settings from the environment and open an empty window.
pub fn bootstrap() -> HeadlessWindow {
    stockdesk_observability::init();

    let config = DesktopConfig::from_env();
    tracing::info!(currency_prefix = %config.currency_prefix, "inventory window ready");

    HeadlessWindow::new(config)
}
