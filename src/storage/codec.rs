//! Persisted JSON shape of an account
//!
//! ```json
//! {
//!   "balance": "120.50",
//!   "sources": [{ "name": "Job", "value": "3000.00" }],
//!   "savings": { "balance": "0", "interest": "0.01", "savingsGoal": "0.2" },
//!   "debts": [{ "name": "Card", "value": "1000.00", "interest": "0.02" }],
//!   "monthTracker": 1,
//!   "receipts": []
//! }
//! ```
//!
//! Decimals are written as strings at full precision and read back from
//! either strings or numbers. Numbers are taken from their literal text, so
//! long values keep every digit. Every field is required.

use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Account, Debt, Money, Savings, Source};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceRecord {
    pub name: String,
    pub value: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsRecord {
    pub balance: Money,
    pub interest: Money,
    pub savings_goal: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtRecord {
    pub name: String,
    pub value: Money,
    pub interest: Money,
}

/// On-disk representation of one account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDocument {
    pub balance: Money,
    pub sources: Vec<SourceRecord>,
    pub savings: SavingsRecord,
    pub debts: Vec<DebtRecord>,
    pub month_tracker: u32,
    pub receipts: Vec<String>,
}

impl From<&Account> for AccountDocument {
    fn from(account: &Account) -> Self {
        let savings = account.savings();
        Self {
            balance: account.balance(),
            sources: account
                .sources()
                .iter()
                .map(|s| SourceRecord {
                    name: s.name.clone(),
                    value: s.value,
                })
                .collect(),
            savings: SavingsRecord {
                balance: savings.balance(),
                interest: savings.interest(),
                savings_goal: savings.goal_percent(),
            },
            debts: account
                .debts()
                .iter()
                .map(|d| DebtRecord {
                    name: d.name().to_string(),
                    value: d.value(),
                    interest: d.interest(),
                })
                .collect(),
            month_tracker: account.period(),
            receipts: account.receipts().to_vec(),
        }
    }
}

impl AccountDocument {
    /// Turn the document into a validated account
    ///
    /// Any broken invariant (duplicate names, rates out of range, negative
    /// debt or savings balance, period 0) is reported as a malformed file.
    pub fn into_account(self) -> LedgerResult<Account> {
        self.build().map_err(|e| match e {
            LedgerError::MalformedAccountFile(_) => e,
            other => LedgerError::MalformedAccountFile(other.to_string()),
        })
    }

    fn build(self) -> LedgerResult<Account> {
        let savings = Savings::restore(
            self.savings.balance,
            self.savings.interest,
            self.savings.savings_goal,
        )?;

        let sources = self
            .sources
            .into_iter()
            .map(|s| Source::new(s.name, s.value))
            .collect();

        let debts = self
            .debts
            .into_iter()
            .map(|d| Debt::new(d.name, d.value, d.interest))
            .collect::<LedgerResult<Vec<_>>>()?;

        Account::from_parts(
            self.balance,
            sources,
            savings,
            debts,
            self.month_tracker,
            self.receipts,
        )
    }
}

/// Serialize an account to pretty-printed JSON
pub fn encode(account: &Account) -> LedgerResult<String> {
    serde_json::to_string_pretty(&AccountDocument::from(account))
        .map_err(|e| LedgerError::Json(format!("Failed to serialize account: {}", e)))
}

/// Parse and validate an account from JSON text
pub fn decode(json: &str) -> LedgerResult<Account> {
    let document: AccountDocument = serde_json::from_str(json)
        .map_err(|e| LedgerError::MalformedAccountFile(e.to_string()))?;
    document.into_account()
}
