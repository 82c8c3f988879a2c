//! Validation error model.

use thiserror::Error;

/// Result type used when parsing raw form input.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Rejected user input.
///
/// Both variants are local and recoverable: the submission is dropped and the
/// user is expected to correct the field and try again.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Quantity text is not a non-negative integer.
    #[error("invalid quantity: {input:?} is not a whole number")]
    InvalidQuantity { input: String },

    /// Price text is not a non-negative decimal number.
    #[error("invalid price: {input:?} is not a decimal number")]
    InvalidPrice { input: String },
}

impl ValidationError {
    pub fn invalid_quantity(input: impl Into<String>) -> Self {
        Self::InvalidQuantity {
            input: input.into(),
        }
    }

    pub fn invalid_price(input: impl Into<String>) -> Self {
        Self::InvalidPrice {
            input: input.into(),
        }
    }

    /// Name of the form field that caused the rejection.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::InvalidQuantity { .. } => "quantity",
            ValidationError::InvalidPrice { .. } => "price",
        }
    }

    /// The raw text that was rejected.
    pub fn input(&self) -> &str {
        match self {
            ValidationError::InvalidQuantity { input }
            | ValidationError::InvalidPrice { input } => input,
        }
    }
}
