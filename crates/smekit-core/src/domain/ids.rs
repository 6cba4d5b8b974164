//! Domain identifiers (strongly-typed IDs).
//!
//! Every record kind gets its own `Id<T>` so a `ProductId` can never be
//! passed where a `TaskId` is expected. The marker `T` is a `PhantomData`
//! and costs nothing at runtime.
//!
//! IDs are plain counters. Each store owns an [`IdSequence`] that hands out
//! 1, 2, 3, ... so independent store instances never share numbering.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;

/// Marker trait for each ID kind.
///
/// Provides the prefix used by `Display` ("product-", "task-", ...).
pub trait IdMarker: Send + Sync + 'static {
    fn prefix() -> &'static str;
}

/// Generic counter-backed ID.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id<T: IdMarker> {
    value: u64,
    #[serde(skip)]
    _marker: PhantomData<T>,
}

impl<T: IdMarker> Id<T> {
    pub fn new(value: u64) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    pub fn get(&self) -> u64 {
        self.value
    }
}

impl<T: IdMarker> From<u64> for Id<T> {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl<T: IdMarker> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", T::prefix(), self.value)
    }
}

/// Monotonic ID allocator owned by a single store.
#[derive(Debug, Clone)]
pub struct IdSequence<T: IdMarker> {
    next: u64,
    _marker: PhantomData<T>,
}

impl<T: IdMarker> IdSequence<T> {
    pub fn new() -> Self {
        Self {
            next: 1,
            _marker: PhantomData,
        }
    }

    /// Allocate the next ID.
    pub fn allocate(&mut self) -> Id<T> {
        let id = Id::new(self.next);
        self.next += 1;
        id
    }

    /// The ID the next `allocate` call will return.
    pub fn peek(&self) -> Id<T> {
        Id::new(self.next)
    }
}

impl<T: IdMarker> Default for IdSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

// ========================================
// Marker types
// ========================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Product {}

impl IdMarker for Product {
    fn prefix() -> &'static str {
        "product-"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FinanceItem {}

impl IdMarker for FinanceItem {
    fn prefix() -> &'static str {
        "finance-"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Lead {}

impl IdMarker for Lead {
    fn prefix() -> &'static str {
        "lead-"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Task {}

impl IdMarker for Task {
    fn prefix() -> &'static str {
        "task-"
    }
}

/// Identifier of a stocked product.
pub type ProductId = Id<Product>;

/// Identifier of a receivable or payable.
pub type FinanceItemId = Id<FinanceItem>;

/// Identifier of a saved sales lead.
pub type LeadId = Id<Lead>;

/// Identifier of a workflow task.
pub type TaskId = Id<Task>;
