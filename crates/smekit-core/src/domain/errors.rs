//! Errors returned by the stores.
//!
//! Every failure is recoverable by the caller: a rejected call leaves the
//! store exactly as it was before the call.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SmeError {
    /// The referenced record does not exist (display form of the ID, e.g. `task-4`).
    #[error("not found: {0}")]
    NotFound(String),

    #[error("invalid quantity {requested} (available: {available})")]
    InvalidQuantity { requested: i64, available: i64 },

    #[error("dependency would introduce a cycle")]
    CycleDetected,

    #[error("invalid budget: {0}")]
    InvalidBudget(f64),

    #[error("invalid amount: {0}")]
    InvalidAmount(f64),

    #[error("impact score {0} is outside 1..=100")]
    InvalidImpactScore(u32),
}

pub type Result<T, E = SmeError> = std::result::Result<T, E>;

impl SmeError {
    pub fn not_found(id: impl std::fmt::Display) -> Self {
        SmeError::NotFound(id.to_string())
    }
}
