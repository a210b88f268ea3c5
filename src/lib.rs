//! BudgeIt - personal finance ledger
//!
//! Tracks a single account: a spendable balance, recurring income and
//! expense sources, a savings pot with interest and a goal, and named debts
//! that accrue interest. Time advances one period at a time; closing a
//! period applies the surplus, accrues interest and records a receipt.
//!
//! # Architecture
//!
//! - `models`: money, sources, savings, debts and the account aggregate
//! - `storage`: JSON codec and atomic file storage for one account
//! - `services`: ledger commands and the session that owns the account
//! - `reports`: forecast of the coming periods
//! - `audit`: append-only event log
//! - `config`: paths and user settings
//! - `display`, `cli`: terminal output and command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use budgeit::models::{Account, Money};
//!
//! let mut account = Account::new();
//! account.add_source("Job", Money::from_int(3000))?;
//! account.add_source("Rent", Money::from_int(-1200))?;
//! let receipt = account.compute_next_period()?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
pub use models::{Account, Money};
