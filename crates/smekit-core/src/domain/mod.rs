//! Domain model: identifiers, records and errors shared by the stores.

pub mod errors;
pub mod finance;
pub mod ids;
pub mod lead;
pub mod product;
pub mod task;

pub use errors::{Result, SmeError};
pub use finance::{FinanceItem, FinanceKind};
pub use ids::{FinanceItemId, Id, IdMarker, IdSequence, LeadId, ProductId, TaskId};
pub use lead::{Lead, NewLead};
pub use product::Product;
pub use task::Task;
