//! In-memory inventory store.

use std::collections::HashMap;

use tracing::{debug, warn};

use super::{PrefixIndex, StockRanking};
use crate::domain::{IdSequence, Product, ProductId, Result, SmeError, ids};

/// Owns product records plus the two indices derived from them.
///
/// Design:
/// - `products` is the single source of truth.
/// - `names` and `ranking` hold `ProductId`s only.
/// - Every stock change updates the record and its ranking entry together.
#[derive(Debug, Default)]
pub struct InventoryStore {
    products: HashMap<ProductId, Product>,
    names: PrefixIndex,
    ranking: StockRanking,
    ids: IdSequence<ids::Product>,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_product(
        &mut self,
        name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
        stock: i64,
        reorder_level: i64,
    ) -> &Product {
        let id = self.ids.allocate();
        let product = Product::new(id, name, category, price, stock, reorder_level);
        self.names.insert(product.name(), id);
        self.ranking.insert(id, stock);
        debug!(product_id = %id, name = product.name(), stock, "product added");
        self.products.entry(id).or_insert(product)
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.get(&id)
    }

    /// Adjust stock by `delta`. A negative delta may take stock below zero;
    /// use [`sell_product`](Self::sell_product) for guarded decrements.
    /// A delta that would overflow the stock count is rejected unchanged.
    pub fn update_stock(&mut self, id: ProductId, delta: i64) -> Result<&Product> {
        let product = self
            .products
            .get_mut(&id)
            .ok_or_else(|| SmeError::not_found(id))?;
        let Some(stock) = product.stock().checked_add(delta) else {
            warn!(product_id = %id, delta, "stock update rejected: overflow");
            return Err(SmeError::InvalidQuantity {
                requested: delta,
                available: product.stock(),
            });
        };
        product.set_stock(stock);
        self.ranking.update(id, stock);
        debug!(product_id = %id, delta, stock, "stock updated");
        Ok(&*product)
    }

    /// Sell `qty` units. Fails without side effects when `qty` is not positive
    /// or exceeds the stock on hand.
    pub fn sell_product(&mut self, id: ProductId, qty: i64) -> Result<&Product> {
        let Some(product) = self.products.get_mut(&id) else {
            warn!(product_id = %id, "sale rejected: unknown product");
            return Err(SmeError::not_found(id));
        };
        let available = product.stock();
        if qty <= 0 || qty > available {
            warn!(product_id = %id, qty, available, "sale rejected");
            return Err(SmeError::InvalidQuantity {
                requested: qty,
                available,
            });
        }
        product.set_stock(available - qty);
        self.ranking.update(id, available - qty);
        debug!(product_id = %id, qty, "product sold");
        Ok(&*product)
    }

    /// Products whose name starts with `prefix` (case-insensitive), by name.
    pub fn search_by_prefix(&self, prefix: &str) -> Vec<&Product> {
        let mut found: Vec<&Product> = self
            .names
            .search(prefix)
            .into_iter()
            .filter_map(|id| self.products.get(&id))
            .collect();
        sort_by_name(&mut found);
        found
    }

    /// Up to `limit` products at or below their reorder level, lowest stock
    /// first (ties by ID). Reads a snapshot of the ranking.
    pub fn low_stock_alerts(&self, limit: usize) -> Vec<&Product> {
        self.ranking
            .ascending()
            .filter_map(|rank| self.products.get(&rank.product_id))
            .filter(|product| product.is_low_stock())
            .take(limit)
            .collect()
    }

    /// Every product, ordered by lowercase name (ties by ID).
    pub fn list_all(&self) -> Vec<&Product> {
        let mut all: Vec<&Product> = self.products.values().collect();
        sort_by_name(&mut all);
        all
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

fn sort_by_name(products: &mut [&Product]) {
    products.sort_by_cached_key(|p| (p.name().to_lowercase(), p.id()));
}
