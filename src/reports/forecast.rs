//! Forecast Report
//!
//! Projects the account forward: what the next period close will do to the
//! balance, savings and every debt, and a running schedule over several
//! periods assuming the sources stay as they are.

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Account, Money};

/// Projection for one debt over the next period
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebtForecast {
    pub name: String,
    pub value: Money,
    /// Rate as a fraction
    pub interest: Money,
    /// Value after the next period close
    pub projected: Money,
    /// Interest that the next period close will add
    pub interest_accrued: Money,
}

/// Projection for savings over the next period
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavingsForecast {
    pub balance: Money,
    pub projected: Money,
    pub interest_earned: Money,
    /// Goal as a fraction of the savings balance
    pub goal_percent: Money,
    pub goal_target: Money,
}

/// One row of the multi-period schedule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleRow {
    /// The period that closed to produce this row
    pub period: u32,
    pub balance: Money,
    pub savings: Money,
    pub total_debt: Money,
    /// Balance plus savings minus debt
    pub net_worth: Money,
}

/// Forecast Report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastReport {
    /// The period the next close will end
    pub period: u32,
    pub surplus: Money,
    pub balance: Money,
    pub projected_balance: Money,
    pub savings: SavingsForecast,
    pub debts: Vec<DebtForecast>,
    pub total_debt: Money,
    pub projected_total_debt: Money,
    pub schedule: Vec<ScheduleRow>,
    /// The period whose close would overflow, if the schedule ended early
    pub schedule_stopped_at: Option<u32>,
}

impl ForecastReport {
    /// Default number of periods in the schedule
    pub const DEFAULT_PERIODS: u32 = 6;

    /// Longest schedule generated; larger requests are clamped
    pub const MAX_PERIODS: u32 = 600;

    /// Generate a forecast without touching `account`
    ///
    /// Fails with `Overflow` when the next period close itself cannot be
    /// computed. A schedule that runs out of range later just ends early.
    pub fn generate(account: &Account, periods: u32) -> LedgerResult<Self> {
        let surplus = account.calculate_surplus()?;

        let debts = account
            .debts()
            .iter()
            .map(|debt| {
                let projected = debt.projected_next_period()?;
                Ok(DebtForecast {
                    name: debt.name().to_string(),
                    value: debt.value(),
                    interest: debt.interest(),
                    projected,
                    interest_accrued: projected - debt.value(),
                })
            })
            .collect::<LedgerResult<Vec<_>>>()?;

        let savings = account.savings();
        let projected_savings = savings.projected_next_period()?;
        let (schedule, schedule_stopped_at) = schedule(account, periods.min(Self::MAX_PERIODS));

        Ok(Self {
            period: account.period(),
            surplus,
            balance: account.balance(),
            projected_balance: account.balance().checked_add(surplus)?,
            savings: SavingsForecast {
                balance: savings.balance(),
                projected: projected_savings,
                interest_earned: projected_savings - savings.balance(),
                goal_percent: savings.goal_percent(),
                goal_target: savings.goal_target(),
            },
            total_debt: account.total_debt()?,
            projected_total_debt: Money::checked_sum(debts.iter().map(|d| d.projected))?,
            debts,
            schedule,
            schedule_stopped_at,
        })
    }

    /// Total interest the next period close adds across all debts
    pub fn total_interest_accrued(&self) -> Money {
        self.debts.iter().map(|d| d.interest_accrued).sum()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let fmt = |m: Money| m.format_with_symbol(symbol);
        let mut output = String::new();

        output.push_str(&format!("Forecast for the close of period {}\n", self.period));
        output.push_str(&"=".repeat(60));
        output.push('\n');

        output.push_str(&format!("Surplus:            {:>15}\n", fmt(self.surplus)));
        output.push_str(&format!(
            "Balance:            {:>15} -> {}\n",
            fmt(self.balance),
            fmt(self.projected_balance)
        ));
        output.push_str(&format!(
            "Savings:            {:>15} -> {} ({} interest)\n",
            fmt(self.savings.balance),
            fmt(self.savings.projected),
            self.savings.interest_earned.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "Savings goal:       {:>15} ({} of savings)\n",
            fmt(self.savings.goal_target),
            self.savings.goal_percent.format_percent()
        ));
        output.push('\n');

        if self.debts.is_empty() {
            output.push_str("No debts.\n");
        } else {
            output.push_str(&format!(
                "{:<20} {:>8} {:>14} {:>14} {:>12}\n",
                "Debt", "Rate", "Current", "Next", "Interest"
            ));
            output.push_str(&"-".repeat(72));
            output.push('\n');
            for debt in &self.debts {
                output.push_str(&format!(
                    "{:<20} {:>8} {:>14} {:>14} {:>12}\n",
                    truncate(&debt.name, 20),
                    debt.interest.format_percent(),
                    fmt(debt.value),
                    fmt(debt.projected),
                    fmt(debt.interest_accrued)
                ));
            }
            output.push_str(&"-".repeat(72));
            output.push('\n');
            output.push_str(&format!(
                "{:<20} {:>8} {:>14} {:>14} {:>12}\n",
                "Total",
                "",
                fmt(self.total_debt),
                fmt(self.projected_total_debt),
                fmt(self.total_interest_accrued())
            ));
        }

        if !self.schedule.is_empty() {
            output.push('\n');
            output.push_str(&format!(
                "{:>6} {:>14} {:>14} {:>14} {:>14}\n",
                "Period", "Balance", "Savings", "Debt", "Net"
            ));
            for row in &self.schedule {
                output.push_str(&format!(
                    "{:>6} {:>14} {:>14} {:>14} {:>14}\n",
                    row.period,
                    fmt(row.balance),
                    fmt(row.savings),
                    fmt(row.total_debt),
                    fmt(row.net_worth)
                ));
            }
        }

        if let Some(period) = self.schedule_stopped_at {
            output.push_str(&format!(
                "Schedule ends at period {}: amounts grow out of range.\n",
                period
            ));
        }

        output
    }
}

/// Close up to `periods` periods on a copy of the account
///
/// Stops at the first close that would overflow and returns that period
/// alongside the rows computed so far.
fn schedule(account: &Account, periods: u32) -> (Vec<ScheduleRow>, Option<u32>) {
    let mut projection = account.clone();
    let mut rows = Vec::new();

    for _ in 0..periods {
        let period = projection.period();
        match close_into_row(&mut projection) {
            Ok(row) => rows.push(row),
            Err(LedgerError::Overflow(_)) => return (rows, Some(period)),
            Err(_) => break,
        }
    }

    (rows, None)
}

fn close_into_row(projection: &mut Account) -> LedgerResult<ScheduleRow> {
    let period = projection.period();
    projection.compute_next_period()?;

    let balance = projection.balance();
    let savings = projection.savings().balance();
    let total_debt = projection.total_debt()?;

    Ok(ScheduleRow {
        period,
        balance,
        savings,
        total_debt,
        net_worth: balance.checked_add(savings)?.checked_sub(total_debt)?,
    })
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max - 3).collect();
        format!("{}...", kept)
    }
}
