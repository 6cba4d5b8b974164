//! Inventory: product records, name prefix search and low-stock ranking.

mod ranking;
mod store;
mod trie;

pub use ranking::{StockRank, StockRanking};
pub use store::InventoryStore;
pub use trie::PrefixIndex;
