//! Debt model
//!
//! A named liability whose value grows by its interest rate every period.

use super::money::Money;
use crate::error::{LedgerError, LedgerResult};

/// A named interest-bearing liability
///
/// Invariants:
/// - `value` is never negative
/// - `interest` is a fraction within [0, 1]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Debt {
    pub(crate) name: String,
    pub(crate) value: Money,
    pub(crate) interest: Money,
}

impl Debt {
    /// Create a new debt
    ///
    /// Fails with `Validation` for a negative value and `OutOfRange` for a
    /// rate outside [0, 1].
    pub fn new(name: impl Into<String>, value: Money, interest: Money) -> LedgerResult<Self> {
        let name = name.into();
        if value.is_negative() {
            return Err(LedgerError::Validation(format!(
                "Debt '{}' cannot have a negative value",
                name
            )));
        }
        check_rate(interest)?;

        Ok(Self {
            name,
            value,
            interest,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> Money {
        self.value
    }

    pub fn interest(&self) -> Money {
        self.interest
    }

    /// Increase the debt, e.g. for new charges
    pub fn add_value(&mut self, amount: Money) -> LedgerResult<()> {
        self.value = self.value.checked_add(amount)?;
        Ok(())
    }

    /// Decrease the debt, never below zero
    pub fn sub_value(&mut self, amount: Money) {
        self.value -= amount;
        if self.value.is_negative() {
            self.value = Money::zero();
        }
    }

    /// Change the interest rate
    pub fn set_interest(&mut self, rate: Money) -> LedgerResult<()> {
        check_rate(rate)?;
        self.interest = rate;
        Ok(())
    }

    /// Value after one more period of interest; does not mutate
    pub fn projected_next_period(&self) -> LedgerResult<Money> {
        self.value.grown_by(self.interest)
    }

    pub(crate) fn accrue_interest(&mut self) -> LedgerResult<()> {
        self.value = self.projected_next_period()?;
        Ok(())
    }
}

fn check_rate(rate: Money) -> LedgerResult<()> {
    if !rate.is_unit_fraction() {
        return Err(LedgerError::OutOfRange {
            field: "Debt interest",
            value: rate,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn card() -> Debt {
        Debt::new("Card", Money::from(dec!(1000.00)), Money::from(dec!(0.02))).unwrap()
    }

    #[test]
    fn test_new_debt() {
        let debt = card();
        assert_eq!(debt.name(), "Card");
        assert_eq!(debt.value(), Money::from(dec!(1000)));
        assert_eq!(debt.interest(), Money::from(dec!(0.02)));
    }

    #[test]
    fn test_new_debt_rejects_bad_input() {
        assert!(matches!(
            Debt::new("Loan", Money::from_int(-1), Money::zero()),
            Err(LedgerError::Validation(_))
        ));
        assert!(matches!(
            Debt::new("Loan", Money::from_int(10), Money::from(dec!(1.01))),
            Err(LedgerError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_add_and_sub_value() {
        let mut debt = card();
        debt.add_value(Money::from(dec!(250.50))).unwrap();
        assert_eq!(debt.value(), Money::from(dec!(1250.50)));

        debt.sub_value(Money::from(dec!(50.50)));
        assert_eq!(debt.value(), Money::from(dec!(1200)));
    }

    #[test]
    fn test_sub_value_floors_at_zero() {
        let mut debt = card();
        debt.sub_value(Money::from_int(5000));
        assert!(debt.value().is_zero());
    }

    #[test]
    fn test_set_interest() {
        let mut debt = card();
        debt.set_interest(Money::from(dec!(0.05))).unwrap();
        assert_eq!(debt.interest(), Money::from(dec!(0.05)));

        assert!(debt.set_interest(Money::from(dec!(-0.01))).is_err());
        assert_eq!(debt.interest(), Money::from(dec!(0.05)));
    }

    #[test]
    fn test_projection_does_not_mutate() {
        let debt = card();
        assert_eq!(debt.projected_next_period().unwrap(), Money::from(dec!(1020.00)));
        assert_eq!(debt.value(), Money::from(dec!(1000.00)));
    }

    #[test]
    fn test_accrue_interest() {
        let mut debt = card();
        debt.accrue_interest().unwrap();
        assert_eq!(debt.value(), Money::from(dec!(1020.00)));
        debt.accrue_interest().unwrap();
        assert_eq!(debt.value(), Money::from(dec!(1040.40)));
    }

    #[test]
    fn test_accrue_interest_overflow_keeps_value() {
        let huge = Money::parse("60000000000000000000000000000").unwrap();
        let mut debt = Debt::new("Card", huge, Money::one()).unwrap();

        assert!(matches!(debt.accrue_interest(), Err(LedgerError::Overflow(_))));
        assert_eq!(debt.value(), huge);
        assert!(debt.add_value(huge).is_err());
        assert_eq!(debt.value(), huge);
    }
}
