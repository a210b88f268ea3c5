//! Account aggregate
//!
//! The account owns the cash balance, the ordered income/expense sources,
//! the savings ledger, the ordered debts and the receipt history. Every
//! mutation goes through here so the cross-entity transfers (savings
//! deposits, debt payments) stay atomic.
//!
//! The account lives in exactly one state, "period N". `compute_next_period`
//! is the only transition and moves it to "period N + 1".
//!
//! Arithmetic that could leave the range of a `Decimal` is checked; an
//! overflow is reported as `LedgerError::Overflow` and nothing changes.

use super::debt::Debt;
use super::money::{Money, DEFAULT_CURRENCY_SYMBOL};
use super::receipt::{DebtLine, PeriodSummary, NO_RECEIPTS};
use super::savings::Savings;
use super::source::Source;
use crate::error::{LedgerError, LedgerResult};

/// A single user's ledger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    balance: Money,
    sources: Vec<Source>,
    savings: Savings,
    debts: Vec<Debt>,
    period: u32,
    receipts: Vec<String>,
}

impl Account {
    /// Create an empty account in period 1
    pub fn new() -> Self {
        Self {
            balance: Money::zero(),
            sources: Vec::new(),
            savings: Savings::new(),
            debts: Vec::new(),
            period: 1,
            receipts: Vec::new(),
        }
    }

    /// Rebuild an account from stored parts, checking name uniqueness and
    /// the period counter
    pub fn from_parts(
        balance: Money,
        sources: Vec<Source>,
        savings: Savings,
        debts: Vec<Debt>,
        period: u32,
        receipts: Vec<String>,
    ) -> LedgerResult<Self> {
        if period < 1 {
            return Err(LedgerError::Validation(
                "Period counter must start at 1".into(),
            ));
        }

        let mut account = Self {
            balance,
            savings,
            period,
            receipts,
            ..Self::new()
        };
        for source in sources {
            account.add_source(&source.name, source.value)?;
        }
        for debt in debts {
            if account.debt(&debt.name).is_some() {
                return Err(LedgerError::duplicate_debt(debt.name));
            }
            account.debts.push(debt);
        }
        Ok(account)
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn sources(&self) -> &[Source] {
        &self.sources
    }

    pub fn savings(&self) -> &Savings {
        &self.savings
    }

    /// Mutable access for rate and goal changes; balance transfers go
    /// through `deposit_savings` / `withdraw_savings`
    pub fn savings_mut(&mut self) -> &mut Savings {
        &mut self.savings
    }

    pub fn debts(&self) -> &[Debt] {
        &self.debts
    }

    /// The current (open) period, starting at 1
    pub fn period(&self) -> u32 {
        self.period
    }

    /// All receipts, oldest first
    pub fn receipts(&self) -> &[String] {
        &self.receipts
    }

    // ---- Balance ----

    /// Add to the balance
    pub fn deposit_balance(&mut self, amount: Money) -> LedgerResult<()> {
        self.balance = self.balance.checked_add(amount)?;
        Ok(())
    }

    /// Subtract from the balance; the balance may go negative
    pub fn withdraw_balance(&mut self, amount: Money) -> LedgerResult<()> {
        self.balance = self.balance.checked_sub(amount)?;
        Ok(())
    }

    /// Set the balance to an absolute value
    pub fn update_balance(&mut self, amount: Money) {
        self.balance = amount;
    }

    // ---- Sources ----

    /// Look up a source by exact name
    pub fn source(&self, name: &str) -> Option<&Source> {
        self.sources.iter().find(|s| s.name == name)
    }

    /// Add a new income or expense source
    pub fn add_source(&mut self, name: &str, value: Money) -> LedgerResult<()> {
        validate_name(name, "Source")?;
        if self.source(name).is_some() {
            return Err(LedgerError::duplicate_source(name));
        }
        self.sources.push(Source::new(name, value));
        Ok(())
    }

    /// Remove a source by name, returning whether one was removed
    pub fn remove_source(&mut self, name: &str) -> bool {
        match self.sources.iter().position(|s| s.name == name) {
            Some(index) => {
                self.sources.remove(index);
                true
            }
            None => false,
        }
    }

    /// Sum of all source values: income minus expenses
    pub fn calculate_surplus(&self) -> LedgerResult<Money> {
        Money::checked_sum(self.sources.iter().map(|s| s.value))
    }

    // ---- Savings ----

    /// Move `amount` from the balance into savings
    pub fn deposit_savings(&mut self, amount: Money) -> LedgerResult<()> {
        validate_transfer(amount)?;
        if amount > self.balance {
            return Err(LedgerError::ExceedsBalance {
                requested: amount,
                available: self.balance,
            });
        }
        self.savings.credit(amount)?;
        self.balance -= amount;
        Ok(())
    }

    /// Move `amount` from savings back into the balance
    pub fn withdraw_savings(&mut self, amount: Money) -> LedgerResult<()> {
        validate_transfer(amount)?;
        let balance = self.balance.checked_add(amount)?;
        self.savings.debit(amount)?;
        self.balance = balance;
        Ok(())
    }

    // ---- Debts ----

    /// Look up a debt by exact name
    pub fn debt(&self, name: &str) -> Option<&Debt> {
        self.debts.iter().find(|d| d.name == name)
    }

    fn debt_mut(&mut self, name: &str) -> Option<&mut Debt> {
        self.debts.iter_mut().find(|d| d.name == name)
    }

    /// Add a new debt
    pub fn add_debt(&mut self, name: &str, value: Money, rate: Money) -> LedgerResult<()> {
        validate_name(name, "Debt")?;
        if self.debt(name).is_some() {
            return Err(LedgerError::duplicate_debt(name));
        }
        self.debts.push(Debt::new(name, value, rate)?);
        Ok(())
    }

    /// Remove a debt by name, returning whether one was removed
    pub fn remove_debt(&mut self, name: &str) -> bool {
        match self.debts.iter().position(|d| d.name == name) {
            Some(index) => {
                self.debts.remove(index);
                true
            }
            None => false,
        }
    }

    /// Pay `amount` off a debt out of the balance
    ///
    /// Returns `Ok(false)` if no debt has this name. A payment larger than
    /// the debt is rejected and nothing changes.
    pub fn pay_debt(&mut self, name: &str, amount: Money) -> LedgerResult<bool> {
        validate_transfer(amount)?;
        let balance = self.balance.checked_sub(amount)?;
        let Some(debt) = self.debt_mut(name) else {
            return Ok(false);
        };
        if amount > debt.value {
            return Err(LedgerError::ExceedsBalance {
                requested: amount,
                available: debt.value,
            });
        }
        debt.sub_value(amount);
        self.balance = balance;
        Ok(true)
    }

    /// Add new charges to a debt, returning whether it was found
    pub fn add_to_debt(&mut self, name: &str, amount: Money) -> LedgerResult<bool> {
        validate_transfer(amount)?;
        match self.debt_mut(name) {
            Some(debt) => {
                debt.add_value(amount)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Change a debt's interest rate, returning whether it was found
    pub fn set_debt_interest(&mut self, name: &str, rate: Money) -> LedgerResult<bool> {
        match self.debt_mut(name) {
            Some(debt) => {
                debt.set_interest(rate)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Projected value of a debt after one more period, if it exists
    pub fn projected_debt(&self, name: &str) -> LedgerResult<Option<Money>> {
        self.debt(name).map(Debt::projected_next_period).transpose()
    }

    /// Total of all debt values
    pub fn total_debt(&self) -> LedgerResult<Money> {
        Money::checked_sum(self.debts.iter().map(|d| d.value))
    }

    // ---- Periods ----

    /// Close the current period and open the next one
    ///
    /// Applies the surplus to the balance, accrues interest on savings and
    /// on every debt, appends a receipt and advances the period counter.
    /// On `Overflow` the account is left unchanged.
    /// Returns the new receipt.
    pub fn compute_next_period(&mut self) -> LedgerResult<&str> {
        self.close_period(DEFAULT_CURRENCY_SYMBOL)
    }

    /// `compute_next_period` with amounts in the receipt printed using
    /// `symbol`
    pub fn close_period(&mut self, symbol: &str) -> LedgerResult<&str> {
        let next_period = self.period.checked_add(1).ok_or_else(|| {
            LedgerError::Overflow(format!("period counter cannot advance past {}", self.period))
        })?;

        let surplus = self.calculate_surplus()?;
        let balance = self.balance.checked_add(surplus)?;

        let mut savings = self.savings.clone();
        savings.accrue_interest()?;

        let mut debts = self.debts.clone();
        for debt in &mut debts {
            debt.accrue_interest()?;
        }

        let summary = PeriodSummary {
            period: self.period,
            surplus,
            balance,
            savings: savings.balance(),
            debts: debts
                .iter()
                .map(|d| DebtLine {
                    name: d.name.clone(),
                    value: d.value,
                })
                .collect(),
        };

        self.balance = balance;
        self.savings = savings;
        self.debts = debts;
        self.receipts.push(summary.render(symbol));
        self.period = next_period;

        Ok(self.return_receipt())
    }

    /// The most recent receipt, or a placeholder if no period has closed
    pub fn return_receipt(&self) -> &str {
        self.receipts
            .last()
            .map(String::as_str)
            .unwrap_or(NO_RECEIPTS)
    }

    /// Drop the receipt history and restart the period counter at 1
    pub fn clear_receipts(&mut self) {
        self.receipts.clear();
        self.period = 1;
    }
}

impl Default for Account {
    fn default() -> Self {
        Account::new()
    }
}

fn validate_name(name: &str, entity: &str) -> LedgerResult<()> {
    if name.trim().is_empty() {
        return Err(LedgerError::Validation(format!(
            "{} name cannot be empty",
            entity
        )));
    }
    Ok(())
}

fn validate_transfer(amount: Money) -> LedgerResult<()> {
    if amount.is_negative() {
        return Err(LedgerError::Validation(format!(
            "Transfer amount cannot be negative: {}",
            amount
        )));
    }
    Ok(())
}
