//! Core data models for BudgeIt
//!
//! This module contains the ledger domain: money, income/expense sources,
//! the savings ledger, debts, period receipts and the account aggregate that
//! owns them all.

pub mod account;
pub mod debt;
pub mod money;
pub mod receipt;
pub mod savings;
pub mod source;

pub use account::Account;
pub use debt::Debt;
pub use money::{Money, DEFAULT_CURRENCY_SYMBOL};
pub use receipt::{DebtLine, PeriodSummary, NO_RECEIPTS};
pub use savings::Savings;
pub use source::Source;
