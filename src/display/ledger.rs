//! Ledger display formatting
//!
//! Formats the balance, sources, savings and debts of an account as
//! column-aligned tables. Views that total or project amounts fail with
//! `Overflow` rather than print a wrapped number.

use crate::error::LedgerResult;
use crate::models::{Account, Debt, Money, Savings, Source};

/// Format the account overview shown by `balance show`
pub fn format_balance(account: &Account, symbol: &str) -> LedgerResult<String> {
    let mut output = String::new();
    output.push_str(&format!("Period:   {}\n", account.period()));
    output.push_str(&format!(
        "Balance:  {}\n",
        account.balance().format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Savings:  {}\n",
        account.savings().balance().format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Debt:     {}\n",
        account.total_debt()?.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Surplus:  {}",
        account.calculate_surplus()?.format_with_symbol(symbol)
    ));
    Ok(output)
}

/// Format the sources as a table with the surplus as the total
pub fn format_source_list(sources: &[Source], symbol: &str) -> LedgerResult<String> {
    if sources.is_empty() {
        return Ok("No sources found.".to_string());
    }

    let name_width = sources
        .iter()
        .map(|s| s.name.chars().count())
        .max()
        .unwrap_or(4)
        .max(7);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:>14}  {}\n",
        "Name",
        "Value",
        "Kind",
        name_width = name_width,
    ));
    output.push_str(&separator(name_width, 22));

    for source in sources {
        let kind = if source.is_income() { "income" } else { "expense" };
        output.push_str(&format!(
            "{:<name_width$}  {:>14}  {}\n",
            source.name,
            source.value.format_with_symbol(symbol),
            kind,
            name_width = name_width,
        ));
    }

    let surplus = Money::checked_sum(sources.iter().map(|s| s.value))?;
    output.push_str(&separator(name_width, 22));
    output.push_str(&format!(
        "{:<name_width$}  {:>14}",
        "SURPLUS",
        surplus.format_with_symbol(symbol),
        name_width = name_width,
    ));

    Ok(output)
}

/// Format the debts as a table with their projected next-period value
pub fn format_debt_list(debts: &[Debt], symbol: &str) -> LedgerResult<String> {
    if debts.is_empty() {
        return Ok("No debts found.".to_string());
    }

    let name_width = debts
        .iter()
        .map(|d| d.name().chars().count())
        .max()
        .unwrap_or(4)
        .max(5);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:>14}  {:>8}  {:>14}\n",
        "Name",
        "Value",
        "Rate",
        "Next period",
        name_width = name_width,
    ));
    output.push_str(&separator(name_width, 42));

    for debt in debts {
        output.push_str(&format!(
            "{:<name_width$}  {:>14}  {:>8}  {:>14}\n",
            debt.name(),
            debt.value().format_with_symbol(symbol),
            debt.interest().format_percent(),
            debt.projected_next_period()?.format_with_symbol(symbol),
            name_width = name_width,
        ));
    }

    let total = Money::checked_sum(debts.iter().map(|d| d.value()))?;
    output.push_str(&separator(name_width, 42));
    output.push_str(&format!(
        "{:<name_width$}  {:>14}",
        "TOTAL",
        total.format_with_symbol(symbol),
        name_width = name_width,
    ));

    Ok(output)
}

/// Format the savings details
pub fn format_savings(savings: &Savings, symbol: &str) -> LedgerResult<String> {
    let mut output = String::new();
    output.push_str("Savings\n");
    output.push_str(&format!(
        "  Balance:      {}\n",
        savings.balance().format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Interest:     {}\n",
        savings.interest().format_percent()
    ));
    output.push_str(&format!(
        "  Next period:  {}\n",
        savings.projected_next_period()?.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Goal:         {} ({})",
        savings.goal_target().format_with_symbol(symbol),
        savings.goal_percent().format_percent()
    ));
    Ok(output)
}

fn separator(name_width: usize, rest: usize) -> String {
    format!("{}\n", "-".repeat(name_width + 2 + rest))
}
