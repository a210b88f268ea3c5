//! Period receipts
//!
//! When a period closes the account captures a `PeriodSummary` and renders it
//! to the immutable text stored in the receipt history.

use super::money::Money;

/// Placeholder returned when no period has been closed yet
pub const NO_RECEIPTS: &str = "There are no receipts recorded for this account.";

/// A debt's balance after interest was applied at period close
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebtLine {
    pub name: String,
    pub value: Money,
}

/// Snapshot of one closed period
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodSummary {
    /// The period that was closed (1-based)
    pub period: u32,
    pub surplus: Money,
    /// Account balance after the surplus was applied
    pub balance: Money,
    /// Savings balance after interest
    pub savings: Money,
    pub debts: Vec<DebtLine>,
}

impl PeriodSummary {
    /// Render the receipt text stored in the account history
    pub fn render(&self, symbol: &str) -> String {
        let fmt = |m: Money| m.format_with_symbol(symbol);
        let mut text = format!("Receipt for period {}\n", self.period);
        text.push_str(&format!("  Surplus:         {}\n", fmt(self.surplus)));
        text.push_str(&format!("  Account balance: {}\n", fmt(self.balance)));
        text.push_str(&format!("  Savings balance: {}", fmt(self.savings)));

        if self.debts.is_empty() {
            text.push_str("\n  Debts:           none");
        } else {
            text.push_str("\n  Debts:");
            for debt in &self.debts {
                text.push_str(&format!("\n    {}: {}", debt.name, fmt(debt.value)));
            }
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_render_with_debts() {
        let summary = PeriodSummary {
            period: 3,
            surplus: Money::from(dec!(1400)),
            balance: Money::from(dec!(2400.5)),
            savings: Money::zero(),
            debts: vec![
                DebtLine {
                    name: "Card".into(),
                    value: Money::from(dec!(1020.00)),
                },
                DebtLine {
                    name: "Car".into(),
                    value: Money::from(dec!(8000)),
                },
            ],
        };

        let expected = "Receipt for period 3\n\
                        \x20 Surplus:         $1400.00\n\
                        \x20 Account balance: $2400.50\n\
                        \x20 Savings balance: $0.00\n\
                        \x20 Debts:\n\
                        \x20   Card: $1020.00\n\
                        \x20   Car: $8000.00";
        assert_eq!(summary.render("$"), expected);
    }

    #[test]
    fn test_render_without_debts() {
        let summary = PeriodSummary {
            period: 1,
            surplus: Money::from(dec!(-50)),
            balance: Money::from(dec!(-50)),
            savings: Money::zero(),
            debts: Vec::new(),
        };

        let text = summary.render("$");
        assert!(text.starts_with("Receipt for period 1\n"));
        assert!(text.contains("Surplus:         -$50.00"));
        assert!(text.ends_with("Debts:           none"));
    }

    #[test]
    fn test_render_uses_currency_symbol() {
        let summary = PeriodSummary {
            period: 2,
            surplus: Money::from_int(10),
            balance: Money::from_int(-4),
            savings: Money::zero(),
            debts: vec![DebtLine {
                name: "Card".into(),
                value: Money::from_int(7),
            }],
        };

        let text = summary.render("€");
        assert!(text.contains("Surplus:         €10.00"));
        assert!(text.contains("Account balance: -€4.00"));
        assert!(text.contains("Card: €7.00"));
        assert!(!text.contains('$'));
    }
}
