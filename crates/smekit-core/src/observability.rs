//! Logging setup and store status views.

use serde::{Deserialize, Serialize};
use tracing_subscriber::{EnvFilter, fmt};

/// Record counts across the four stores.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreCounts {
    pub products: usize,
    pub low_stock_items: usize,
    pub finance_items: usize,
    pub leads: usize,
    pub tasks: usize,
}

/// Install a fmt subscriber filtered by `RUST_LOG`, falling back to
/// `default_directives` (e.g. `"smekit_core=debug"`).
///
/// Safe to call more than once; only the first call installs anything.
pub fn init_tracing(default_directives: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_tracing_twice_does_not_panic() {
        init_tracing("smekit_core=debug");
        init_tracing("smekit_core=info");
        tracing::debug!("tracing initialised");
    }

    #[test]
    fn counts_serialize_by_field_name() {
        let counts = StoreCounts {
            products: 5,
            low_stock_items: 2,
            ..StoreCounts::default()
        };
        let value = serde_json::to_value(&counts).unwrap();
        assert_eq!(value["products"], 5);
        assert_eq!(value["low_stock_items"], 2);
        assert_eq!(value["tasks"], 0);
    }
}
