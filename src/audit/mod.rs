//! Event log for BudgeIt
//!
//! Every applied operation on the account is appended to a line-delimited
//! JSON file (`events.log`). Rejected operations are never recorded, and
//! the ledger model itself never writes here; the session does.

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
