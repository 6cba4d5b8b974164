//! One instance of every store, wired from a single `EngineConfig`.

use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::crm::LeadDeduplicator;
use crate::domain::{FinanceItem, Lead, NewLead, Product};
use crate::finance::FinanceLedger;
use crate::inventory::InventoryStore;
use crate::observability::StoreCounts;
use crate::ports::{Clock, SystemClock};
use crate::workflow::DependencyGraph;

/// Quick overview across all stores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analytics {
    pub counts: StoreCounts,
    pub upcoming: Vec<FinanceItem>,
}

/// The stores are independent; nothing here is shared between them.
/// Callers needing cross-thread access wrap the whole toolkit (or a single
/// store) in one lock.
#[derive(Debug)]
pub struct Toolkit<C = SystemClock> {
    pub inventory: InventoryStore,
    pub finance: FinanceLedger<C>,
    pub crm: LeadDeduplicator,
    pub workflow: DependencyGraph,
    config: EngineConfig,
}

impl Toolkit<SystemClock> {
    pub fn new(config: EngineConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl Default for Toolkit<SystemClock> {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl<C: Clock> Toolkit<C> {
    pub fn with_clock(config: EngineConfig, clock: C) -> Self {
        Self {
            inventory: InventoryStore::new(),
            finance: FinanceLedger::with_clock(clock, config.budget_selector()),
            crm: LeadDeduplicator::new(),
            workflow: DependencyGraph::new(),
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Low-stock alerts capped at the configured limit.
    pub fn low_stock_alerts(&self) -> Vec<&Product> {
        self.inventory
            .low_stock_alerts(self.config.low_stock_alert_limit)
    }

    /// Near-duplicates of `probe` at the configured distance.
    pub fn possible_duplicates(&self, probe: &NewLead) -> Vec<&Lead> {
        self.crm
            .find_similar(probe, self.config.duplicate_max_distance)
    }

    /// Upcoming finance items capped at the configured limit.
    pub fn upcoming(&self) -> Vec<&FinanceItem> {
        self.finance.upcoming(self.config.upcoming_limit)
    }

    pub fn counts(&self) -> StoreCounts {
        StoreCounts {
            products: self.inventory.len(),
            low_stock_items: self.inventory.low_stock_alerts(usize::MAX).len(),
            finance_items: self.finance.len(),
            leads: self.crm.len(),
            tasks: self.workflow.len(),
        }
    }

    /// Counts plus the next `upcoming` finance items.
    pub fn analytics(&self, upcoming: usize) -> Analytics {
        Analytics {
            counts: self.counts(),
            upcoming: self
                .finance
                .upcoming(upcoming)
                .into_iter()
                .cloned()
                .collect(),
        }
    }
}
