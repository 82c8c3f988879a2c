//! Ordered in-memory product store.

use crate::product::Product;

/// Ordered collection of products.
///
/// Row `i` of the inventory table is always `products()[i]`. Removal keeps the
/// relative order of the remaining products.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryStore {
    products: Vec<Product>,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a validated product and return its row index.
    pub fn add(&mut self, product: Product) -> usize {
        self.products.push(product);
        let index = self.products.len() - 1;
        tracing::debug!(index, count = self.products.len(), "product appended");
        index
    }

    /// Remove the product at `index`, shifting later rows up by one.
    ///
    /// An index past the end is a no-op and returns `None`.
    pub fn remove_at(&mut self, index: usize) -> Option<Product> {
        if index >= self.products.len() {
            tracing::warn!(
                index,
                count = self.products.len(),
                "remove ignored: index out of range"
            );
            return None;
        }
        let removed = self.products.remove(index);
        tracing::debug!(index, count = self.products.len(), "product removed");
        Some(removed)
    }

    pub fn count(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Product> {
        self.products.get(index)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }
}

impl<'a> IntoIterator for &'a InventoryStore {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
