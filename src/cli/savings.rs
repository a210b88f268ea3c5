//! Savings CLI commands

use clap::Subcommand;

use crate::display::format_savings;
use crate::error::LedgerResult;
use crate::services::{Command, Session};

use super::{parse_amount, parse_percent, run_command};

/// Savings subcommands
#[derive(Subcommand)]
pub enum SavingsCommands {
    /// Show savings details
    Show,
    /// Move money from the balance into savings
    Deposit {
        /// Amount to move
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
    /// Move money from savings back into the balance
    Withdraw {
        /// Amount to move
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
    /// Set the interest rate earned each period
    Interest {
        /// Rate in percent (e.g., "1.5")
        #[arg(allow_hyphen_values = true)]
        percent: String,
    },
    /// Set the savings goal as a percentage of savings
    Goal {
        /// Goal in percent (e.g., "20")
        #[arg(allow_hyphen_values = true)]
        percent: String,
    },
}

/// Handle a savings command
pub fn handle_savings_command(session: &mut Session, cmd: SavingsCommands) -> LedgerResult<()> {
    let symbol = session.settings().currency_symbol.clone();

    let command = match cmd {
        SavingsCommands::Show => {
            println!("{}", format_savings(session.account().savings(), &symbol)?);
            return Ok(());
        }
        SavingsCommands::Deposit { amount } => Command::DepositSavings(parse_amount(&amount)?),
        SavingsCommands::Withdraw { amount } => Command::WithdrawSavings(parse_amount(&amount)?),
        SavingsCommands::Interest { percent } => {
            Command::SetSavingsInterest(parse_percent(&percent)?)
        }
        SavingsCommands::Goal { percent } => Command::SetSavingsGoal(parse_percent(&percent)?),
    };

    run_command(session, command)?;
    println!("{}", format_savings(session.account().savings(), &symbol)?);
    Ok(())
}
