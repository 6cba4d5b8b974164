//! Finance: receivable/payable ledger and budget-constrained bill selection.

mod knapsack;
mod ledger;

pub use knapsack::{BudgetSelector, CAPACITY_CEILING, DEFAULT_MAX_CAPACITY, KnapsackItem, solve};
pub use ledger::FinanceLedger;
