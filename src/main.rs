use anyhow::Result;
use clap::{Parser, Subcommand};

use budgeit::audit::AuditLogger;
use budgeit::cli::{
    handle_balance_command, handle_debt_command, handle_period_command, handle_savings_command,
    handle_source_command,
};
use budgeit::config::{BudgeitPaths, Settings};
use budgeit::display::format_event_log;
use budgeit::reports::ForecastReport;
use budgeit::services::Session;

#[derive(Parser)]
#[command(
    name = "budgeit",
    version,
    about = "Personal finance ledger with monthly periods",
    long_about = "BudgeIt tracks a balance, recurring income and expenses, savings \
                  and interest-bearing debts. Closing a period applies the surplus, \
                  accrues interest and records a receipt."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Balance commands
    #[command(subcommand)]
    Balance(budgeit::cli::BalanceCommands),

    /// Income and expense sources
    #[command(subcommand)]
    Source(budgeit::cli::SourceCommands),

    /// Savings commands
    #[command(subcommand)]
    Savings(budgeit::cli::SavingsCommands),

    /// Debt commands
    #[command(subcommand)]
    Debt(budgeit::cli::DebtCommands),

    /// Period and receipt commands
    #[command(subcommand)]
    Period(budgeit::cli::PeriodCommands),

    /// Project the account over the coming periods
    Forecast {
        /// Number of periods to project
        #[arg(short, long, default_value_t = ForecastReport::DEFAULT_PERIODS)]
        periods: u32,
    },

    /// Show the event log
    Log {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        count: usize,
        /// Delete the event log
        #[arg(long)]
        clear: bool,
    },

    /// Replace the saved account with an empty one
    Reset,

    /// Initialize BudgeIt
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = BudgeitPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Balance(cmd)) => {
            let mut session = Session::open(&paths, settings)?;
            handle_balance_command(&mut session, cmd)?;
        }
        Some(Commands::Source(cmd)) => {
            let mut session = Session::open(&paths, settings)?;
            handle_source_command(&mut session, cmd)?;
        }
        Some(Commands::Savings(cmd)) => {
            let mut session = Session::open(&paths, settings)?;
            handle_savings_command(&mut session, cmd)?;
        }
        Some(Commands::Debt(cmd)) => {
            let mut session = Session::open(&paths, settings)?;
            handle_debt_command(&mut session, cmd)?;
        }
        Some(Commands::Period(cmd)) => {
            let mut session = Session::open(&paths, settings)?;
            handle_period_command(&mut session, cmd)?;
        }
        Some(Commands::Forecast { periods }) => {
            let session = Session::open(&paths, settings)?;
            let report = ForecastReport::generate(session.account(), periods)?;
            print!("{}", report.format_terminal(&session.settings().currency_symbol));
        }
        Some(Commands::Log { count, clear }) => {
            let logger = AuditLogger::new(paths.event_log());
            if clear {
                logger.clear()?;
                println!("Event log cleared.");
            } else {
                println!("{}", format_event_log(&logger.read_recent(count)?));
            }
        }
        Some(Commands::Reset) => {
            let mut session = Session::for_paths(&paths, settings);
            session.reset()?;
            session.save()?;
            println!("Account reset.");
        }
        Some(Commands::Init) => {
            println!("Initializing BudgeIt at: {}", paths.base_dir().display());
            paths.ensure_directories()?;
            settings.save(&paths)?;

            let session = Session::open(&paths, settings)?;
            if session.store().exists() {
                println!("Existing account kept.");
            } else {
                session.save()?;
                println!("Created an empty account.");
            }
            println!("Initialization complete!");
        }
        Some(Commands::Config) => {
            println!("BudgeIt Configuration");
            println!("=====================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Account file:   {}", paths.account_file().display());
            println!("Event log:      {}", paths.event_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:        {}", settings.currency_symbol);
            println!("  Allow negative balance: {}", settings.allow_negative_balance);
            println!("  Event log enabled:      {}", settings.audit_enabled);
        }
        None => {
            println!("BudgeIt - personal finance ledger");
            println!();
            println!("Run 'budgeit --help' for usage information.");
        }
    }

    Ok(())
}
