use serde::{Deserialize, Serialize};

use stockdesk_core::{Price, Quantity};

/// One inventory line item.
///
/// Products are built only from validated values and are never edited after
/// they enter the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    name: String,
    quantity: Quantity,
    price: Price,
    category: String,
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        quantity: Quantity,
        price: Price,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            quantity,
            price,
            category: category.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn category(&self) -> &str {
        &self.category
    }
}
