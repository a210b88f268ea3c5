//! Debt CLI commands

use clap::Subcommand;

use crate::display::format_debt_list;
use crate::error::LedgerResult;
use crate::services::{Command, Session};

use super::{parse_amount, parse_percent, run_command};

/// Debt subcommands
#[derive(Subcommand)]
pub enum DebtCommands {
    /// List all debts
    List,
    /// Add a debt
    Add {
        /// Debt name
        name: String,
        /// Amount owed
        #[arg(allow_hyphen_values = true)]
        value: String,
        /// Interest per period in percent (e.g., "2")
        #[arg(allow_hyphen_values = true)]
        percent: String,
    },
    /// Remove a debt
    Remove {
        /// Debt name
        name: String,
    },
    /// Pay off part of a debt from the balance
    Pay {
        /// Debt name
        name: String,
        /// Amount to pay
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
    /// Add new charges to a debt
    Charge {
        /// Debt name
        name: String,
        /// Amount charged
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
    /// Change a debt's interest rate
    Interest {
        /// Debt name
        name: String,
        /// Rate in percent
        #[arg(allow_hyphen_values = true)]
        percent: String,
    },
}

/// Handle a debt command
pub fn handle_debt_command(session: &mut Session, cmd: DebtCommands) -> LedgerResult<()> {
    let symbol = session.settings().currency_symbol.clone();

    let (name, command) = match cmd {
        DebtCommands::List => {
            println!("{}", format_debt_list(session.account().debts(), &symbol)?);
            return Ok(());
        }
        DebtCommands::Add {
            name,
            value,
            percent,
        } => {
            let command = Command::AddDebt {
                name: name.clone(),
                value: parse_amount(&value)?,
                interest: parse_percent(&percent)?,
            };
            (name, command)
        }
        DebtCommands::Remove { name } => {
            run_command(session, Command::RemoveDebt { name: name.clone() })?;
            println!("Removed debt: {}", name);
            return Ok(());
        }
        DebtCommands::Pay { name, amount } => {
            let command = Command::PayDebt {
                name: name.clone(),
                amount: parse_amount(&amount)?,
            };
            (name, command)
        }
        DebtCommands::Charge { name, amount } => {
            let command = Command::ChargeDebt {
                name: name.clone(),
                amount: parse_amount(&amount)?,
            };
            (name, command)
        }
        DebtCommands::Interest { name, percent } => {
            let command = Command::SetDebtInterest {
                name: name.clone(),
                rate: parse_percent(&percent)?,
            };
            (name, command)
        }
    };

    run_command(session, command)?;

    if let Some(debt) = session.account().debt(&name) {
        println!(
            "{}: {} at {}",
            debt.name(),
            debt.value().format_with_symbol(&symbol),
            debt.interest().format_percent()
        );
    }
    Ok(())
}
