//! `stockdesk-core` — value objects and validation errors.
//!
//! This crate contains **pure domain** primitives (no presentation concerns).

pub mod error;
pub mod value_object;

pub use error::{ValidationError, ValidationResult};
pub use value_object::{Price, Quantity, ValueObject};
