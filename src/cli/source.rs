//! Source CLI commands
//!
//! Sources are recurring income (positive) or expenses (negative).

use clap::Subcommand;

use crate::display::format_source_list;
use crate::error::LedgerResult;
use crate::services::{Command, Session};

use super::{parse_amount, run_command};

/// Source subcommands
#[derive(Subcommand)]
pub enum SourceCommands {
    /// List all sources and the resulting surplus
    List,
    /// Add an income (positive) or expense (negative) source
    Add {
        /// Source name
        name: String,
        /// Value per period, negative for expenses
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Remove a source
    Remove {
        /// Source name
        name: String,
    },
}

/// Handle a source command
pub fn handle_source_command(session: &mut Session, cmd: SourceCommands) -> LedgerResult<()> {
    let symbol = session.settings().currency_symbol.clone();

    match cmd {
        SourceCommands::List => {
            println!("{}", format_source_list(session.account().sources(), &symbol)?);
        }
        SourceCommands::Add { name, value } => {
            let value = parse_amount(&value)?;
            run_command(
                session,
                Command::AddSource {
                    name: name.clone(),
                    value,
                },
            )?;
            println!("Added source: {} ({})", name, value.format_with_symbol(&symbol));
        }
        SourceCommands::Remove { name } => {
            run_command(session, Command::RemoveSource { name: name.clone() })?;
            println!("Removed source: {}", name);
        }
    }

    Ok(())
}
