use serde::{Deserialize, Serialize};
use std::fmt;

use super::ProductId;

/// A stocked item.
///
/// Everything except `stock` is fixed at creation. Stock only moves through
/// `InventoryStore::update_stock` / `InventoryStore::sell_product`, which keep
/// the low-stock ranking in sync.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    category: String,
    price: f64,
    stock: i64,
    reorder_level: i64,
}

impl Product {
    pub(crate) fn new(
        id: ProductId,
        name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
        stock: i64,
        reorder_level: i64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
            price,
            stock,
            reorder_level,
        }
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn stock(&self) -> i64 {
        self.stock
    }

    pub fn reorder_level(&self) -> i64 {
        self.reorder_level
    }

    /// At or below the reorder threshold.
    pub fn is_low_stock(&self) -> bool {
        self.stock <= self.reorder_level
    }

    pub(crate) fn set_stock(&mut self, stock: i64) {
        self.stock = stock;
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} | {} | {:.2} | stock={} (reorder<={})",
            self.id, self.name, self.category, self.price, self.stock, self.reorder_level
        )
    }
}
