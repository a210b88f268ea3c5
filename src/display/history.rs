//! Receipt and event log formatting

use crate::audit::AuditEntry;
use crate::models::NO_RECEIPTS;

/// Format the whole receipt history, oldest first
pub fn format_receipts(receipts: &[String]) -> String {
    if receipts.is_empty() {
        return NO_RECEIPTS.to_string();
    }
    receipts.join("\n\n")
}

/// Format event log entries, one per line
pub fn format_event_log(entries: &[AuditEntry]) -> String {
    if entries.is_empty() {
        return "No events recorded.".to_string();
    }

    entries
        .iter()
        .map(AuditEntry::format_human_readable)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::EntityType;

    #[test]
    fn test_no_receipts() {
        assert_eq!(format_receipts(&[]), NO_RECEIPTS);
    }

    #[test]
    fn test_receipts_are_separated() {
        let receipts = vec!["Receipt for period 1".to_string(), "Receipt for period 2".to_string()];
        assert_eq!(
            format_receipts(&receipts),
            "Receipt for period 1\n\nReceipt for period 2"
        );
    }

    #[test]
    fn test_event_log() {
        assert_eq!(format_event_log(&[]), "No events recorded.");

        let entries = vec![
            AuditEntry::create(EntityType::Source, Some("Job".into()), "added"),
            AuditEntry::advance("closed period 1"),
        ];
        let output = format_event_log(&entries);
        assert_eq!(output.lines().count(), 2);
        assert!(output.contains("CREATE Source (Job): added"));
        assert!(output.contains("ADVANCE Period: closed period 1"));
    }
}
