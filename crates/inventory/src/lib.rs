//! Inventory domain module.
//!
//! This crate holds the product line items and the ordered in-memory store,
//! implemented as plain deterministic logic (no IO, no widgets, no storage).

pub mod product;
pub mod store;

pub use product::Product;
pub use store::InventoryStore;
