//! CLI command handlers
//!
//! Each handler turns parsed arguments into a `Command`, runs it through the
//! session, saves the account and prints the result.

pub mod balance;
pub mod debt;
pub mod period;
pub mod savings;
pub mod source;

pub use balance::{handle_balance_command, BalanceCommands};
pub use debt::{handle_debt_command, DebtCommands};
pub use period::{handle_period_command, PeriodCommands};
pub use savings::{handle_savings_command, SavingsCommands};
pub use source::{handle_source_command, SourceCommands};

use crate::error::{LedgerError, LedgerResult};
use crate::models::Money;
use crate::services::{Command, CommandOutcome, Session};

/// Parse an amount argument such as "1000", "12.50" or "-$40"
pub fn parse_amount(input: &str) -> LedgerResult<Money> {
    Money::parse(input)
}

/// Parse a percentage argument ("2.5" or "2.5%") into a fraction
pub fn parse_percent(input: &str) -> LedgerResult<Money> {
    let trimmed = input.trim();
    let number = trimmed.strip_suffix('%').unwrap_or(trimmed);
    Ok(Money::parse(number)
        .map_err(|_| LedgerError::InvalidNumber(input.to_string()))?
        .percent_to_fraction())
}

/// Execute a command and save the account
///
/// A name that matched nothing becomes a `NotFound` error so the process
/// exits with a failure status; nothing is saved in that case.
pub fn run_command(session: &mut Session, command: Command) -> LedgerResult<CommandOutcome> {
    match session.execute(&command)? {
        CommandOutcome::NotFound { entity_type, name } => Err(LedgerError::NotFound {
            entity_type: entity_type.as_str(),
            name,
        }),
        outcome => {
            session.save()?;
            Ok(outcome)
        }
    }
}
