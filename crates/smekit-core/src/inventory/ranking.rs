//! Addressable min-heap ranking products by stock.
//!
//! Design:
//! - `heap` is a binary min-heap of `(stock, product_id)` entries.
//! - `positions` maps every product to its slot in `heap`.
//! - Invariant: `positions[heap[i].product_id] == i` for every `i`.
//!
//! Keeping positions lets a stock change reposition one entry in O(log n)
//! instead of searching the heap for it.

use std::collections::HashMap;

use crate::domain::ProductId;

/// Ranking key. Ordered by stock, then by product ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StockRank {
    pub stock: i64,
    pub product_id: ProductId,
}

#[derive(Debug, Clone, Default)]
pub struct StockRanking {
    heap: Vec<StockRank>,
    positions: HashMap<ProductId, usize>,
}

impl StockRanking {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn contains(&self, product_id: ProductId) -> bool {
        self.positions.contains_key(&product_id)
    }

    /// Insert a product, or reposition it if already ranked.
    pub fn insert(&mut self, product_id: ProductId, stock: i64) {
        if self.update(product_id, stock) {
            return;
        }
        let pos = self.heap.len();
        self.heap.push(StockRank { stock, product_id });
        self.positions.insert(product_id, pos);
        self.sift_up(pos);
    }

    /// Change the stock key of a ranked product. Returns `false` if unknown.
    pub fn update(&mut self, product_id: ProductId, stock: i64) -> bool {
        let Some(&pos) = self.positions.get(&product_id) else {
            return false;
        };
        let old = self.heap[pos].stock;
        self.heap[pos].stock = stock;
        if stock < old {
            self.sift_up(pos);
        } else if stock > old {
            self.sift_down(pos);
        }
        true
    }

    /// Lowest entry without removing it.
    pub fn peek(&self) -> Option<StockRank> {
        self.heap.first().copied()
    }

    /// Remove and return the lowest entry.
    pub fn pop(&mut self) -> Option<StockRank> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.swap(0, last);
        let top = self.heap.pop()?;
        self.positions.remove(&top.product_id);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some(top)
    }

    /// Drain a copy of the ranking in ascending order, leaving `self` untouched.
    pub fn ascending(&self) -> impl Iterator<Item = StockRank> + use<> {
        let mut snapshot = self.clone();
        std::iter::from_fn(move || snapshot.pop())
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.positions.insert(self.heap[a].product_id, a);
        self.positions.insert(self.heap[b].product_id, b);
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if self.heap[pos] >= self.heap[parent] {
                break;
            }
            self.swap(pos, parent);
            pos = parent;
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * pos + 1;
            let right = left + 1;
            let mut smallest = pos;
            if left < len && self.heap[left] < self.heap[smallest] {
                smallest = left;
            }
            if right < len && self.heap[right] < self.heap[smallest] {
                smallest = right;
            }
            if smallest == pos {
                break;
            }
            self.swap(pos, smallest);
            pos = smallest;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn pid(n: u64) -> ProductId {
        ProductId::new(n)
    }

    fn drained(ranking: &StockRanking) -> Vec<(i64, u64)> {
        ranking
            .ascending()
            .map(|r| (r.stock, r.product_id.get()))
            .collect()
    }

    #[test]
    fn pops_in_stock_then_id_order() {
        let mut ranking = StockRanking::new();
        ranking.insert(pid(1), 5);
        ranking.insert(pid(2), 2);
        ranking.insert(pid(3), 5);
        ranking.insert(pid(4), 0);

        assert_eq!(drained(&ranking), vec![(0, 4), (2, 2), (5, 1), (5, 3)]);
    }

    #[test]
    fn update_repositions_entry() {
        let mut ranking = StockRanking::new();
        ranking.insert(pid(1), 10);
        ranking.insert(pid(2), 20);
        ranking.insert(pid(3), 30);

        assert!(ranking.update(pid(3), 1));
        assert_eq!(ranking.peek().map(|r| r.product_id), Some(pid(3)));

        assert!(ranking.update(pid(3), 99));
        assert_eq!(drained(&ranking), vec![(10, 1), (20, 2), (99, 3)]);
    }

    #[test]
    fn update_unknown_is_rejected() {
        let mut ranking = StockRanking::new();
        ranking.insert(pid(1), 1);
        assert!(!ranking.update(pid(9), 0));
        assert_eq!(ranking.len(), 1);
    }

    #[test]
    fn insert_existing_acts_as_update() {
        let mut ranking = StockRanking::new();
        ranking.insert(pid(1), 4);
        ranking.insert(pid(1), 2);
        assert_eq!(ranking.len(), 1);
        assert_eq!(ranking.peek().map(|r| r.stock), Some(2));
    }

    #[test]
    fn ascending_does_not_mutate() {
        let mut ranking = StockRanking::new();
        ranking.insert(pid(1), 3);
        ranking.insert(pid(2), 1);
        let _ = ranking.ascending().count();
        assert_eq!(ranking.len(), 2);
        assert!(ranking.contains(pid(1)));
        assert_eq!(ranking.peek().map(|r| r.product_id), Some(pid(2)));
    }

    #[test]
    fn random_updates_keep_heap_sorted() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut ranking = StockRanking::new();
        let mut expected = HashMap::new();
        for n in 1..=40 {
            let stock = rng.gen_range(-5..50);
            ranking.insert(pid(n), stock);
            expected.insert(n, stock);
        }
        for _ in 0..200 {
            let n = rng.gen_range(1..=40);
            let stock = rng.gen_range(-5..50);
            assert!(ranking.update(pid(n), stock));
            expected.insert(n, stock);
        }

        let mut want: Vec<(i64, u64)> = expected.into_iter().map(|(n, s)| (s, n)).collect();
        want.sort();
        assert_eq!(drained(&ranking), want);
    }
}
