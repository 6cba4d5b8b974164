//! Receivables and payables.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::FinanceItemId;

/// Which side of the ledger an item sits on.
///
/// Only payables carry an impact score (1..=100, higher = more critical to pay).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FinanceKind {
    Receivable,
    Payable { impact_score: u8 },
}

/// A single money movement expected on `due_date`. Insert-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinanceItem {
    pub id: FinanceItemId,
    pub amount: f64,
    pub due_date: NaiveDate,
    #[serde(flatten)]
    pub kind: FinanceKind,
}

impl FinanceItem {
    pub(crate) fn receivable(id: FinanceItemId, amount: f64, due_date: NaiveDate) -> Self {
        Self {
            id,
            amount,
            due_date,
            kind: FinanceKind::Receivable,
        }
    }

    pub(crate) fn payable(
        id: FinanceItemId,
        amount: f64,
        due_date: NaiveDate,
        impact_score: u8,
    ) -> Self {
        Self {
            id,
            amount,
            due_date,
            kind: FinanceKind::Payable { impact_score },
        }
    }

    pub fn is_payable(&self) -> bool {
        matches!(self.kind, FinanceKind::Payable { .. })
    }

    pub fn is_receivable(&self) -> bool {
        matches!(self.kind, FinanceKind::Receivable)
    }

    /// `None` for receivables.
    pub fn impact_score(&self) -> Option<u8> {
        match self.kind {
            FinanceKind::Payable { impact_score } => Some(impact_score),
            FinanceKind::Receivable => None,
        }
    }

    /// Effect on cash: positive for receivables, negative for payables.
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            FinanceKind::Receivable => self.amount,
            FinanceKind::Payable { .. } => -self.amount,
        }
    }
}

impl fmt::Display for FinanceItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            FinanceKind::Receivable => {
                write!(f, "[{}] Receive {:.2} by {}", self.id, self.amount, self.due_date)
            }
            FinanceKind::Payable { impact_score } => write!(
                f,
                "[{}] Pay {:.2} by {} | impact={}",
                self.id, self.amount, self.due_date, impact_score
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn impact_score_only_on_payables() {
        let r = FinanceItem::receivable(FinanceItemId::new(1), 100.0, date(2024, 1, 1));
        let p = FinanceItem::payable(FinanceItemId::new(2), 50.0, date(2024, 1, 2), 70);
        assert_eq!(r.impact_score(), None);
        assert_eq!(p.impact_score(), Some(70));
        assert!(r.is_receivable() && !r.is_payable());
        assert!(p.is_payable() && !p.is_receivable());
    }

    #[test]
    fn signed_amount_follows_direction() {
        let r = FinanceItem::receivable(FinanceItemId::new(1), 100.0, date(2024, 1, 1));
        let p = FinanceItem::payable(FinanceItemId::new(2), 40.0, date(2024, 1, 1), 10);
        assert_eq!(r.signed_amount() + p.signed_amount(), 60.0);
    }

    #[test]
    fn serializes_with_kind_tag() {
        let p = FinanceItem::payable(FinanceItemId::new(3), 12000.0, date(2024, 3, 5), 60);
        let value = serde_json::to_value(&p).unwrap();
        assert_eq!(value["kind"], "payable");
        assert_eq!(value["impact_score"], 60);
        assert_eq!(value["due_date"], "2024-03-05");
        assert_eq!(value["id"], 3);
    }
}
