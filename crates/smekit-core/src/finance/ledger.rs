//! Receivables/payables ledger.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{Days, NaiveDate};
use tracing::{debug, info};

use super::{BudgetSelector, KnapsackItem};
use crate::domain::{FinanceItem, FinanceItemId, IdSequence, Result, SmeError, ids};
use crate::ports::{Clock, SystemClock};

/// In-memory ledger.
///
/// Design:
/// - `items` is the single source of truth, keyed by ID (= insertion order).
/// - `by_due` orders the same IDs by `(due_date, id)` for `upcoming` and the
///   cash-flow horizon scan.
/// - Receivables and payables share one ID sequence.
#[derive(Debug)]
pub struct FinanceLedger<C = SystemClock> {
    items: BTreeMap<FinanceItemId, FinanceItem>,
    by_due: BTreeSet<(NaiveDate, FinanceItemId)>,
    ids: IdSequence<ids::FinanceItem>,
    selector: BudgetSelector,
    clock: C,
}

impl FinanceLedger<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock, BudgetSelector::default())
    }
}

impl Default for FinanceLedger<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> FinanceLedger<C> {
    pub fn with_clock(clock: C, selector: BudgetSelector) -> Self {
        Self {
            items: BTreeMap::new(),
            by_due: BTreeSet::new(),
            ids: IdSequence::new(),
            selector,
            clock,
        }
    }

    pub fn add_receivable(&mut self, amount: f64, due_date: NaiveDate) -> Result<&FinanceItem> {
        check_amount(amount)?;
        let id = self.ids.allocate();
        debug!(item_id = %id, amount, %due_date, "receivable added");
        Ok(self.insert(FinanceItem::receivable(id, amount, due_date)))
    }

    /// `impact_score` must be within 1..=100.
    pub fn add_payable(
        &mut self,
        amount: f64,
        due_date: NaiveDate,
        impact_score: u32,
    ) -> Result<&FinanceItem> {
        check_amount(amount)?;
        let impact = u8::try_from(impact_score)
            .ok()
            .filter(|score| (1..=100).contains(score))
            .ok_or(SmeError::InvalidImpactScore(impact_score))?;
        let id = self.ids.allocate();
        debug!(item_id = %id, amount, %due_date, impact, "payable added");
        Ok(self.insert(FinanceItem::payable(id, amount, due_date, impact)))
    }

    pub fn get(&self, id: FinanceItemId) -> Option<&FinanceItem> {
        self.items.get(&id)
    }

    /// The `k` earliest-due items, ties by ID.
    pub fn upcoming(&self, k: usize) -> Vec<&FinanceItem> {
        self.by_due
            .iter()
            .take(k)
            .filter_map(|(_, id)| self.items.get(id))
            .collect()
    }

    /// Cash on hand plus receivables minus payables due on or before
    /// today + `days`. Overdue items count as well.
    pub fn project_cash_flow(&self, current_cash: f64, days: u32) -> f64 {
        let horizon = self
            .clock
            .today()
            .checked_add_days(Days::new(u64::from(days)))
            .unwrap_or(NaiveDate::MAX);
        self.by_due
            .range(..=(horizon, FinanceItemId::new(u64::MAX)))
            .filter_map(|(_, id)| self.items.get(id))
            .fold(current_cash, |cash, item| cash + item.signed_amount())
    }

    /// Payables to settle now so that total impact is maximal within `budget`.
    ///
    /// Payables are considered in insertion order; see [`super::solve`] for how
    /// ties between equally good selections are broken.
    pub fn pick_payables_to_pay(&self, budget: f64) -> Result<Vec<&FinanceItem>> {
        let payables: Vec<&FinanceItem> = self.payables().collect();
        let candidates: Vec<KnapsackItem> = payables
            .iter()
            .map(|item| {
                KnapsackItem::from_amount(item.amount, u64::from(item.impact_score().unwrap_or(0)))
            })
            .collect();
        let chosen = self.selector.select(&candidates, budget)?;
        info!(
            budget,
            candidates = candidates.len(),
            selected = chosen.len(),
            "payables selected"
        );
        Ok(chosen.into_iter().map(|i| payables[i]).collect())
    }

    pub fn payables(&self) -> impl Iterator<Item = &FinanceItem> {
        self.items.values().filter(|item| item.is_payable())
    }

    pub fn receivables(&self) -> impl Iterator<Item = &FinanceItem> {
        self.items.values().filter(|item| item.is_receivable())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn insert(&mut self, item: FinanceItem) -> &FinanceItem {
        let id = item.id;
        self.by_due.insert((item.due_date, id));
        self.items.entry(id).or_insert(item)
    }
}

fn check_amount(amount: f64) -> Result<()> {
    if amount.is_finite() && amount >= 0.0 {
        Ok(())
    } else {
        Err(SmeError::InvalidAmount(amount))
    }
}
