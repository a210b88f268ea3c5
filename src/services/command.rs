//! Ledger commands
//!
//! Every mutation a user can request is a `Command`. Applying one either
//! changes the account and reports what happened, or returns an error and
//! leaves the account exactly as it was.

use crate::audit::{AuditEntry, EntityType};
use crate::error::LedgerResult;
use crate::models::{Account, Money, DEFAULT_CURRENCY_SYMBOL};

/// A single mutation of the account
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    DepositBalance(Money),
    WithdrawBalance(Money),
    SetBalance(Money),
    AddSource { name: String, value: Money },
    RemoveSource { name: String },
    DepositSavings(Money),
    WithdrawSavings(Money),
    /// Rate as a fraction in [0, 1]
    SetSavingsInterest(Money),
    /// Goal as a fraction in [0, 1]
    SetSavingsGoal(Money),
    AddDebt {
        name: String,
        value: Money,
        interest: Money,
    },
    RemoveDebt { name: String },
    PayDebt { name: String, amount: Money },
    ChargeDebt { name: String, amount: Money },
    SetDebtInterest { name: String, rate: Money },
    ClosePeriod,
    ClearReceipts,
}

/// Result of a command that did not fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Applied,
    /// No source or debt had the given name; nothing changed
    NotFound {
        entity_type: EntityType,
        name: String,
    },
    /// A period was closed; carries the new receipt
    PeriodClosed(String),
}

impl CommandOutcome {
    /// Whether the account was changed
    pub fn is_applied(&self) -> bool {
        !matches!(self, CommandOutcome::NotFound { .. })
    }
}

impl Command {
    /// Apply the command to `account`
    pub fn apply(&self, account: &mut Account) -> LedgerResult<CommandOutcome> {
        self.apply_with_symbol(account, DEFAULT_CURRENCY_SYMBOL)
    }

    /// Apply the command, printing receipt amounts with `symbol`
    pub fn apply_with_symbol(
        &self,
        account: &mut Account,
        symbol: &str,
    ) -> LedgerResult<CommandOutcome> {
        let found = match self {
            Command::DepositBalance(amount) => {
                account.deposit_balance(*amount)?;
                true
            }
            Command::WithdrawBalance(amount) => {
                account.withdraw_balance(*amount)?;
                true
            }
            Command::SetBalance(amount) => {
                account.update_balance(*amount);
                true
            }
            Command::AddSource { name, value } => {
                account.add_source(name, *value)?;
                true
            }
            Command::RemoveSource { name } => account.remove_source(name),
            Command::DepositSavings(amount) => {
                account.deposit_savings(*amount)?;
                true
            }
            Command::WithdrawSavings(amount) => {
                account.withdraw_savings(*amount)?;
                true
            }
            Command::SetSavingsInterest(rate) => {
                account.savings_mut().set_interest(*rate)?;
                true
            }
            Command::SetSavingsGoal(goal) => {
                account.savings_mut().set_goal_percent(*goal)?;
                true
            }
            Command::AddDebt {
                name,
                value,
                interest,
            } => {
                account.add_debt(name, *value, *interest)?;
                true
            }
            Command::RemoveDebt { name } => account.remove_debt(name),
            Command::PayDebt { name, amount } => account.pay_debt(name, *amount)?,
            Command::ChargeDebt { name, amount } => account.add_to_debt(name, *amount)?,
            Command::SetDebtInterest { name, rate } => account.set_debt_interest(name, *rate)?,
            Command::ClosePeriod => {
                let receipt = account.close_period(symbol)?.to_string();
                return Ok(CommandOutcome::PeriodClosed(receipt));
            }
            Command::ClearReceipts => {
                account.clear_receipts();
                true
            }
        };

        if found {
            Ok(CommandOutcome::Applied)
        } else {
            Ok(CommandOutcome::NotFound {
                entity_type: self.entity_type(),
                name: self.entity_name().unwrap_or_default().to_string(),
            })
        }
    }

    /// The part of the account this command touches
    pub fn entity_type(&self) -> EntityType {
        match self {
            Command::DepositBalance(_) | Command::WithdrawBalance(_) | Command::SetBalance(_) => {
                EntityType::Balance
            }
            Command::AddSource { .. } | Command::RemoveSource { .. } => EntityType::Source,
            Command::DepositSavings(_)
            | Command::WithdrawSavings(_)
            | Command::SetSavingsInterest(_)
            | Command::SetSavingsGoal(_) => EntityType::Savings,
            Command::AddDebt { .. }
            | Command::RemoveDebt { .. }
            | Command::PayDebt { .. }
            | Command::ChargeDebt { .. }
            | Command::SetDebtInterest { .. } => EntityType::Debt,
            Command::ClosePeriod | Command::ClearReceipts => EntityType::Period,
        }
    }

    /// Name of the source or debt the command targets, if any
    pub fn entity_name(&self) -> Option<&str> {
        match self {
            Command::AddSource { name, .. }
            | Command::RemoveSource { name }
            | Command::AddDebt { name, .. }
            | Command::RemoveDebt { name }
            | Command::PayDebt { name, .. }
            | Command::ChargeDebt { name, .. }
            | Command::SetDebtInterest { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Build the event log entry for this command once it has been applied
    ///
    /// `account` is the state after the command.
    pub fn audit_entry(&self, account: &Account) -> AuditEntry {
        let entity_type = self.entity_type();
        let name = self.entity_name().map(str::to_string);

        match self {
            Command::DepositBalance(amount) => {
                AuditEntry::update(entity_type, name, format!("deposited {}", amount))
            }
            Command::WithdrawBalance(amount) => {
                AuditEntry::update(entity_type, name, format!("withdrew {}", amount))
            }
            Command::SetBalance(amount) => {
                AuditEntry::update(entity_type, name, format!("set to {}", amount))
            }
            Command::AddSource { value, .. } => {
                AuditEntry::create(entity_type, name, format!("added with value {}", value))
            }
            Command::RemoveSource { .. } | Command::RemoveDebt { .. } => {
                AuditEntry::delete(entity_type, name, "removed")
            }
            Command::DepositSavings(amount) => AuditEntry::update(
                entity_type,
                name,
                format!("moved {} from balance into savings", amount),
            ),
            Command::WithdrawSavings(amount) => AuditEntry::update(
                entity_type,
                name,
                format!("moved {} from savings into balance", amount),
            ),
            Command::SetSavingsInterest(rate) => AuditEntry::update(
                entity_type,
                name,
                format!("interest set to {}", rate.format_percent()),
            ),
            Command::SetSavingsGoal(goal) => AuditEntry::update(
                entity_type,
                name,
                format!("goal set to {}", goal.format_percent()),
            ),
            Command::AddDebt {
                value, interest, ..
            } => AuditEntry::create(
                entity_type,
                name,
                format!("added with value {} at {}", value, interest.format_percent()),
            ),
            Command::PayDebt { amount, .. } => {
                AuditEntry::update(entity_type, name, format!("paid {}", amount))
            }
            Command::ChargeDebt { amount, .. } => {
                AuditEntry::update(entity_type, name, format!("charged {}", amount))
            }
            Command::SetDebtInterest { rate, .. } => AuditEntry::update(
                entity_type,
                name,
                format!("interest set to {}", rate.format_percent()),
            ),
            Command::ClosePeriod => AuditEntry::advance(format!(
                "closed period {}, balance now {}",
                account.period().saturating_sub(1),
                account.balance()
            )),
            Command::ClearReceipts => {
                AuditEntry::delete(entity_type, name, "cleared receipt history")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::error::LedgerError;
    use rust_decimal_macros::dec;

    fn money(value: rust_decimal::Decimal) -> Money {
        Money::from_decimal(value)
    }

    fn account_with_card() -> Account {
        let mut account = Account::new();
        Command::AddDebt {
            name: "Card".into(),
            value: money(dec!(1000)),
            interest: money(dec!(0.02)),
        }
        .apply(&mut account)
        .unwrap();
        account
    }

    #[test]
    fn test_balance_commands() {
        let mut account = Account::new();

        Command::DepositBalance(money(dec!(100))).apply(&mut account).unwrap();
        Command::WithdrawBalance(money(dec!(150))).apply(&mut account).unwrap();
        assert_eq!(account.balance(), money(dec!(-50)));

        Command::SetBalance(money(dec!(20))).apply(&mut account).unwrap();
        assert_eq!(account.balance(), money(dec!(20)));
    }

    #[test]
    fn test_remove_missing_source_is_not_found() {
        let mut account = Account::new();
        let outcome = Command::RemoveSource { name: "Job".into() }
            .apply(&mut account)
            .unwrap();

        assert_eq!(
            outcome,
            CommandOutcome::NotFound {
                entity_type: EntityType::Source,
                name: "Job".into()
            }
        );
        assert!(!outcome.is_applied());
    }

    #[test]
    fn test_pay_debt() {
        let mut account = account_with_card();

        let outcome = Command::PayDebt {
            name: "Card".into(),
            amount: money(dec!(200)),
        }
        .apply(&mut account)
        .unwrap();

        assert_eq!(outcome, CommandOutcome::Applied);
        assert_eq!(account.debt("Card").unwrap().value(), money(dec!(800)));
        assert_eq!(account.balance(), money(dec!(-200)));
    }

    #[test]
    fn test_overpayment_leaves_account_unchanged() {
        let mut account = account_with_card();
        let before = account.clone();

        let err = Command::PayDebt {
            name: "Card".into(),
            amount: money(dec!(1000.01)),
        }
        .apply(&mut account)
        .unwrap_err();

        assert!(matches!(err, LedgerError::ExceedsBalance { .. }));
        assert_eq!(account, before);
    }

    #[test]
    fn test_pay_unknown_debt() {
        let mut account = account_with_card();
        let outcome = Command::PayDebt {
            name: "Loan".into(),
            amount: money(dec!(10)),
        }
        .apply(&mut account)
        .unwrap();

        assert!(matches!(outcome, CommandOutcome::NotFound { .. }));
    }

    #[test]
    fn test_close_period_returns_receipt() {
        let mut account = account_with_card();

        match Command::ClosePeriod.apply(&mut account).unwrap() {
            CommandOutcome::PeriodClosed(receipt) => {
                assert!(receipt.starts_with("Receipt for period 1"));
                assert!(receipt.contains("Card: $1020.00"));
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert_eq!(account.period(), 2);
    }

    #[test]
    fn test_close_period_with_symbol() {
        let mut account = account_with_card();

        match Command::ClosePeriod
            .apply_with_symbol(&mut account, "€")
            .unwrap()
        {
            CommandOutcome::PeriodClosed(receipt) => {
                assert!(receipt.contains("Card: €1020.00"));
                assert!(!receipt.contains('$'));
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_deposit_overflow_leaves_account_unchanged() {
        let mut account = Account::new();
        account.update_balance(money(rust_decimal::Decimal::MAX));
        let before = account.clone();

        let err = Command::DepositBalance(money(dec!(1)))
            .apply(&mut account)
            .unwrap_err();

        assert!(matches!(err, LedgerError::Overflow(_)));
        assert_eq!(account, before);
    }

    #[test]
    fn test_savings_rate_out_of_range() {
        let mut account = Account::new();
        let err = Command::SetSavingsInterest(money(dec!(1.5)))
            .apply(&mut account)
            .unwrap_err();

        assert!(matches!(err, LedgerError::OutOfRange { .. }));
        assert!(account.savings().interest().is_zero());
    }

    #[test]
    fn test_audit_entries() {
        let mut account = account_with_card();

        let add = Command::AddSource {
            name: "Job".into(),
            value: money(dec!(3000)),
        };
        add.apply(&mut account).unwrap();
        let entry = add.audit_entry(&account);
        assert_eq!(entry.operation, Operation::Create);
        assert_eq!(entry.entity_type, EntityType::Source);
        assert_eq!(entry.entity_name.as_deref(), Some("Job"));
        assert_eq!(entry.description, "added with value $3000.00");

        Command::ClosePeriod.apply(&mut account).unwrap();
        let entry = Command::ClosePeriod.audit_entry(&account);
        assert_eq!(entry.operation, Operation::Advance);
        assert_eq!(entry.description, "closed period 1, balance now $3000.00");

        let rate = Command::SetDebtInterest {
            name: "Card".into(),
            rate: money(dec!(0.025)),
        };
        assert_eq!(rate.audit_entry(&account).description, "interest set to 2.5%");
    }
}
