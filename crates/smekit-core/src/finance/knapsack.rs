//! Budget-constrained selection (0/1 knapsack).

use crate::domain::{Result, SmeError};

/// Upper bound on the DP width. Budgets above this are clamped.
pub const DEFAULT_MAX_CAPACITY: usize = 200_000;

/// Largest capacity any selector accepts. Bounds the DP row at 8 MB and the
/// taken table at 125 KB per item.
pub const CAPACITY_CEILING: usize = 1_000_000;

/// One candidate: integer cost and integer benefit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnapsackItem {
    pub weight: usize,
    pub value: u64,
}

impl KnapsackItem {
    pub fn new(weight: usize, value: u64) -> Self {
        Self { weight, value }
    }

    /// Weight is the amount rounded to the nearest whole unit.
    /// Negative or non-finite amounts weigh nothing.
    pub fn from_amount(amount: f64, value: u64) -> Self {
        let weight = if amount.is_finite() && amount > 0.0 {
            amount.round() as usize
        } else {
            0
        };
        Self { weight, value }
    }
}

/// Stateless optimizer. Only carries the capacity clamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetSelector {
    max_capacity: usize,
}

impl BudgetSelector {
    /// `max_capacity` above [`CAPACITY_CEILING`] is lowered to the ceiling.
    pub fn new(max_capacity: usize) -> Self {
        Self {
            max_capacity: max_capacity.min(CAPACITY_CEILING),
        }
    }

    pub fn max_capacity(&self) -> usize {
        self.max_capacity
    }

    /// Budget rounded down and clamped to `max_capacity`.
    ///
    /// Non-positive budgets map to 0; NaN and infinities are rejected.
    pub fn capacity_for(&self, budget: f64) -> Result<usize> {
        if !budget.is_finite() {
            return Err(SmeError::InvalidBudget(budget));
        }
        if budget <= 0.0 {
            return Ok(0);
        }
        let floored = budget.floor() as u64;
        Ok(floored.min(self.max_capacity as u64) as usize)
    }

    /// Indices (ascending) of the items to take under `budget`.
    ///
    /// A budget of zero or less selects nothing.
    pub fn select(&self, items: &[KnapsackItem], budget: f64) -> Result<Vec<usize>> {
        let capacity = self.capacity_for(budget)?;
        if budget <= 0.0 {
            return Ok(Vec::new());
        }
        Ok(solve(items, capacity))
    }
}

impl Default for BudgetSelector {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CAPACITY)
    }
}

/// Maximise total value with total weight <= `capacity`.
///
/// `best` is the rolling DP row over residual capacity; `taken` records, one
/// bit per (item, capacity) cell, whether item `i` raised the optimum at
/// capacity `w`. Reconstruction walks the items last to first, which fixes
/// the choice among equal optima. `capacity` is clamped to
/// [`CAPACITY_CEILING`]. O(items x capacity) time, O(capacity) values plus
/// one bit table.
pub fn solve(items: &[KnapsackItem], capacity: usize) -> Vec<usize> {
    let capacity = capacity.min(CAPACITY_CEILING);
    let mut best = vec![0u64; capacity + 1];
    let mut taken = TakenBits::new(items.len(), capacity + 1);

    for (i, item) in items.iter().enumerate() {
        if item.weight > capacity {
            continue;
        }
        // Descending so best[w - weight] still holds the previous row.
        for w in (item.weight..=capacity).rev() {
            let candidate = best[w - item.weight].saturating_add(item.value);
            if candidate > best[w] {
                best[w] = candidate;
                taken.set(i, w);
            }
        }
    }

    let mut chosen = Vec::new();
    let mut residual = capacity;
    for i in (0..items.len()).rev() {
        if taken.get(i, residual) {
            chosen.push(i);
            residual -= items[i].weight;
        }
    }
    chosen.reverse();
    chosen
}

/// Row-major bitset, one row per item, packed into 64-bit words.
struct TakenBits {
    words_per_row: usize,
    words: Vec<u64>,
}

impl TakenBits {
    fn new(rows: usize, width: usize) -> Self {
        let words_per_row = width.div_ceil(64);
        Self {
            words_per_row,
            words: vec![0; rows * words_per_row],
        }
    }

    fn set(&mut self, row: usize, col: usize) {
        self.words[row * self.words_per_row + col / 64] |= 1 << (col % 64);
    }

    fn get(&self, row: usize, col: usize) -> bool {
        self.words[row * self.words_per_row + col / 64] & (1 << (col % 64)) != 0
    }
}
