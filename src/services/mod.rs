//! Service layer for BudgeIt
//!
//! Commands describe mutations; the session owns the current account and
//! applies them.

pub mod command;
pub mod session;

pub use command::{Command, CommandOutcome};
pub use session::Session;
