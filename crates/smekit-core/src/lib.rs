//! smekit-core
//!
//! In-memory engines behind a small-business toolset.
//!
//! # Modules
//! - **domain**: records (Product, FinanceItem, Lead, Task), typed IDs, errors
//! - **ports**: seams the stores depend on (Clock)
//! - **inventory**: product store with trie prefix search and low-stock ranking
//! - **finance**: receivable/payable ledger and 0/1-knapsack bill selection
//! - **crm**: lead store with edit-distance duplicate detection
//! - **workflow**: task dependency DAG, topological order, critical path
//! - **toolkit**: one of each store plus a cross-store analytics view
//! - **config** / **observability**: TOML configuration and tracing setup
//!
//! All operations are synchronous and single-threaded. A failed call leaves
//! its store unchanged.

pub mod config;
pub mod crm;
pub mod domain;
pub mod finance;
pub mod inventory;
pub mod observability;
pub mod ports;
pub mod toolkit;
pub mod workflow;

pub use config::{ConfigError, EngineConfig};
pub use domain::{Result, SmeError};
pub use toolkit::{Analytics, Toolkit};
