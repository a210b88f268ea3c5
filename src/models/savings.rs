//! Savings sub-ledger model
//!
//! Each account owns exactly one savings ledger. Money only moves in and out
//! through the owning account (see `Account::deposit_savings`), so the
//! balance mutators here are crate-private.

use super::money::Money;
use crate::error::{LedgerError, LedgerResult};

/// Savings balance with an interest rate and a percent-of-income goal
///
/// Invariants:
/// - `balance` is never negative
/// - `interest` and `goal_percent` are fractions within [0, 1]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Savings {
    pub(crate) balance: Money,
    pub(crate) interest: Money,
    pub(crate) goal_percent: Money,
}

impl Savings {
    /// Create an empty savings ledger with no interest and no goal
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a savings ledger from stored values, checking its invariants
    pub fn restore(balance: Money, interest: Money, goal_percent: Money) -> LedgerResult<Self> {
        if balance.is_negative() {
            return Err(LedgerError::Validation(
                "Savings balance cannot be negative".into(),
            ));
        }
        let mut savings = Self {
            balance,
            ..Self::default()
        };
        savings.set_interest(interest)?;
        savings.set_goal_percent(goal_percent)?;
        Ok(savings)
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn interest(&self) -> Money {
        self.interest
    }

    pub fn goal_percent(&self) -> Money {
        self.goal_percent
    }

    /// Set the interest rate; rejected rates leave the old one in place
    pub fn set_interest(&mut self, rate: Money) -> LedgerResult<()> {
        if !rate.is_unit_fraction() {
            return Err(LedgerError::OutOfRange {
                field: "Savings interest",
                value: rate,
            });
        }
        self.interest = rate;
        Ok(())
    }

    /// Set the savings goal as a fraction of income
    pub fn set_goal_percent(&mut self, goal: Money) -> LedgerResult<()> {
        if !goal.is_unit_fraction() {
            return Err(LedgerError::OutOfRange {
                field: "Savings goal",
                value: goal,
            });
        }
        self.goal_percent = goal;
        Ok(())
    }

    /// Balance after one more period of interest; does not mutate
    pub fn projected_next_period(&self) -> LedgerResult<Money> {
        self.balance.grown_by(self.interest)
    }

    /// `balance * goal_percent`
    pub fn goal_target(&self) -> Money {
        self.balance * self.goal_percent
    }

    pub(crate) fn credit(&mut self, amount: Money) -> LedgerResult<()> {
        self.balance = self.balance.checked_add(amount)?;
        Ok(())
    }

    /// Take `amount` out of savings, refusing to overdraw
    pub(crate) fn debit(&mut self, amount: Money) -> LedgerResult<()> {
        if amount > self.balance {
            return Err(LedgerError::ExceedsBalance {
                requested: amount,
                available: self.balance,
            });
        }
        self.balance -= amount;
        Ok(())
    }

    pub(crate) fn accrue_interest(&mut self) -> LedgerResult<()> {
        self.balance = self.projected_next_period()?;
        Ok(())
    }
}
