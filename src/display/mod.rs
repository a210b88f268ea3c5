//! Display formatting for terminal output

pub mod history;
pub mod ledger;

pub use history::{format_event_log, format_receipts};
pub use ledger::{format_balance, format_debt_list, format_savings, format_source_list};
