//! Period CLI commands
//!
//! Closing a period applies the surplus, accrues interest and records a
//! receipt.

use clap::Subcommand;

use crate::display::format_receipts;
use crate::error::LedgerResult;
use crate::services::{Command, CommandOutcome, Session};

use super::run_command;

/// Period subcommands
#[derive(Subcommand)]
pub enum PeriodCommands {
    /// Close the current period and print its receipt
    End,
    /// Show the surplus the current sources produce each period
    Surplus,
    /// Show the latest receipt
    Receipt {
        /// Show every receipt instead of only the latest
        #[arg(short, long)]
        all: bool,
    },
    /// Delete all receipts and restart at period 1
    Clear,
}

/// Handle a period command
pub fn handle_period_command(session: &mut Session, cmd: PeriodCommands) -> LedgerResult<()> {
    let symbol = session.settings().currency_symbol.clone();

    match cmd {
        PeriodCommands::End => {
            if let CommandOutcome::PeriodClosed(receipt) =
                run_command(session, Command::ClosePeriod)?
            {
                println!("{}", receipt);
            }
            println!("Now in period {}", session.account().period());
        }
        PeriodCommands::Surplus => {
            println!(
                "Surplus: {}",
                session
                    .account()
                    .calculate_surplus()?
                    .format_with_symbol(&symbol)
            );
        }
        PeriodCommands::Receipt { all } => {
            if all {
                println!("{}", format_receipts(session.account().receipts()));
            } else {
                println!("{}", session.account().return_receipt());
            }
        }
        PeriodCommands::Clear => {
            run_command(session, Command::ClearReceipts)?;
            println!("Receipts cleared. Now in period 1");
        }
    }

    Ok(())
}
