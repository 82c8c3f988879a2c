//! Raw text of the product entry form.

use serde::{Deserialize, Serialize};

use stockdesk_core::{Price, Quantity, ValidationResult};
use stockdesk_inventory::Product;

/// The four input fields, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductForm {
    pub name: String,
    pub quantity: String,
    pub price: String,
    pub category: String,
}

impl ProductForm {
    pub fn new(
        name: impl Into<String>,
        quantity: impl Into<String>,
        price: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            quantity: quantity.into(),
            price: price.into(),
            category: category.into(),
        }
    }

    /// True when every field is empty.
    pub fn is_blank(&self) -> bool {
        self.name.is_empty()
            && self.quantity.is_empty()
            && self.price.is_empty()
            && self.category.is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Parse the form into a product.
    ///
    /// Quantity is checked before price, so a form with both fields wrong
    /// reports `InvalidQuantity`. Name and category are taken verbatim.
    pub fn validate(&self) -> ValidationResult<Product> {
        let quantity: Quantity = self.quantity.parse()?;
        let price: Price = self.price.parse()?;
        Ok(Product::new(
            self.name.clone(),
            quantity,
            price,
            self.category.clone(),
        ))
    }
}
