//! Balance CLI commands

use clap::Subcommand;

use crate::display::format_balance;
use crate::error::LedgerResult;
use crate::services::{Command, Session};

use super::{parse_amount, run_command};

/// Balance subcommands
#[derive(Subcommand)]
pub enum BalanceCommands {
    /// Show the balance, savings, debt and surplus
    Show,
    /// Add money to the balance
    Deposit {
        /// Amount (e.g., "100" or "100.00")
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
    /// Take money out of the balance
    Withdraw {
        /// Amount (e.g., "100" or "100.00")
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
    /// Set the balance to an exact amount
    Set {
        /// New balance
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
}

/// Handle a balance command
pub fn handle_balance_command(session: &mut Session, cmd: BalanceCommands) -> LedgerResult<()> {
    let symbol = session.settings().currency_symbol.clone();

    let command = match cmd {
        BalanceCommands::Show => {
            println!("{}", format_balance(session.account(), &symbol)?);
            return Ok(());
        }
        BalanceCommands::Deposit { amount } => Command::DepositBalance(parse_amount(&amount)?),
        BalanceCommands::Withdraw { amount } => Command::WithdrawBalance(parse_amount(&amount)?),
        BalanceCommands::Set { amount } => Command::SetBalance(parse_amount(&amount)?),
    };

    run_command(session, command)?;
    println!(
        "Balance: {}",
        session.account().balance().format_with_symbol(&symbol)
    );
    Ok(())
}
