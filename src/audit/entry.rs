//! Event log entry types
//!
//! Each applied ledger operation is recorded as one `AuditEntry`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of change recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
    Delete,
    /// A period was closed
    Advance,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Delete => write!(f, "DELETE"),
            Operation::Advance => write!(f, "ADVANCE"),
        }
    }
}

/// Part of the account an entry refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Balance,
    Source,
    Debt,
    Savings,
    Period,
    Account,
}

impl EntityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::Balance => "Balance",
            EntityType::Source => "Source",
            EntityType::Debt => "Debt",
            EntityType::Savings => "Savings",
            EntityType::Period => "Period",
            EntityType::Account => "Account",
        }
    }
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single event log entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    pub entity_type: EntityType,

    /// Name of the source or debt affected, if any
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub entity_name: Option<String>,

    /// What happened, e.g. "deposited $100.00"
    pub description: String,
}

impl AuditEntry {
    /// Create an entry stamped with the current time
    pub fn new(
        operation: Operation,
        entity_type: EntityType,
        entity_name: Option<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            entity_type,
            entity_name,
            description: description.into(),
        }
    }

    pub fn create(
        entity_type: EntityType,
        entity_name: Option<String>,
        description: impl Into<String>,
    ) -> Self {
        Self::new(Operation::Create, entity_type, entity_name, description)
    }

    pub fn update(
        entity_type: EntityType,
        entity_name: Option<String>,
        description: impl Into<String>,
    ) -> Self {
        Self::new(Operation::Update, entity_type, entity_name, description)
    }

    pub fn delete(
        entity_type: EntityType,
        entity_name: Option<String>,
        description: impl Into<String>,
    ) -> Self {
        Self::new(Operation::Delete, entity_type, entity_name, description)
    }

    pub fn advance(description: impl Into<String>) -> Self {
        Self::new(Operation::Advance, EntityType::Period, None, description)
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entity_type,
        );

        if let Some(name) = &self.entity_name {
            output.push_str(&format!(" ({})", name));
        }

        output.push_str(&format!(": {}", self.description));
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Create.to_string(), "CREATE");
        assert_eq!(Operation::Advance.to_string(), "ADVANCE");
    }

    #[test]
    fn test_entity_type_display() {
        assert_eq!(EntityType::Debt.to_string(), "Debt");
        assert_eq!(EntityType::Period.to_string(), "Period");
    }

    #[test]
    fn test_advance_entry() {
        let entry = AuditEntry::advance("closed period 1");
        assert_eq!(entry.operation, Operation::Advance);
        assert_eq!(entry.entity_type, EntityType::Period);
        assert!(entry.entity_name.is_none());
    }

    #[test]
    fn test_serialization() {
        let entry = AuditEntry::create(EntityType::Source, Some("Job".into()), "added $3,000.00");
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"operation\":\"create\""));
        assert!(json.contains("\"entity_type\":\"source\""));

        let back: AuditEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn test_missing_name_is_omitted() {
        let entry = AuditEntry::update(EntityType::Balance, None, "deposited $5.00");
        let json = serde_json::to_string(&entry).unwrap();
        assert!(!json.contains("entity_name"));
    }

    #[test]
    fn test_human_readable() {
        let mut entry = AuditEntry::delete(EntityType::Debt, Some("Card".into()), "removed");
        entry.timestamp = Utc.with_ymd_and_hms(2025, 1, 15, 9, 30, 0).unwrap();

        assert_eq!(
            entry.format_human_readable(),
            "[2025-01-15 09:30:00 UTC] DELETE Debt (Card): removed"
        );
    }
}
