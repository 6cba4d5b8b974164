//! CRM: lead records and near-duplicate detection.

mod dedup;
mod edit_distance;

pub use dedup::LeadDeduplicator;
pub use edit_distance::edit_distance;
