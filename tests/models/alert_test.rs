#[cfg(test)]
mod tests {
    use anc_register::algorithm::risk::TriageLabel;
    use anc_register::models::alert::{AuditEntry, SystemAlert, push_alert, push_audit};
    use chrono::{TimeZone, Utc};

    fn ts(seconds: i64) -> chrono::DateTime<Utc> {
        Utc.timestamp_opt(1_780_000_000 + seconds, 0).unwrap()
    }

    #[test]
    fn test_only_critical_tiers_raise_alerts() {
        assert!(SystemAlert::for_triage("p1", "Ny. Sari", TriageLabel::Hitam, ts(0)).is_some());
        assert!(SystemAlert::for_triage("p1", "Ny. Sari", TriageLabel::Merah, ts(0)).is_some());
        assert!(SystemAlert::for_triage("p1", "Ny. Sari", TriageLabel::Kuning, ts(0)).is_none());
        assert!(SystemAlert::for_triage("p1", "Ny. Sari", TriageLabel::Hijau, ts(0)).is_none());
    }

    #[test]
    fn test_alert_message_names_the_tier() {
        let alert = SystemAlert::for_triage("p1", "Ny. Sari", TriageLabel::Hitam, ts(0)).unwrap();
        assert_eq!(alert.message, "Risiko HITAM terdeteksi!");
        assert!(!alert.is_read);
    }

    #[test]
    fn test_alert_list_is_newest_first_and_capped() {
        let mut alerts = Vec::new();
        for i in 0..5 {
            let alert =
                SystemAlert::for_triage("p1", "Ny. Sari", TriageLabel::Merah, ts(i)).unwrap();
            push_alert(&mut alerts, alert, 3);
        }

        assert_eq!(alerts.len(), 3);
        // Newest first: the last pushed timestamp leads
        assert_eq!(alerts[0].timestamp, ts(4));
        assert_eq!(alerts[2].timestamp, ts(2));
    }

    #[test]
    fn test_mark_read() {
        let mut alert =
            SystemAlert::for_triage("p1", "Ny. Sari", TriageLabel::Hitam, ts(0)).unwrap();
        alert.mark_read();
        assert!(alert.is_read);
    }

    #[test]
    fn test_audit_trail_is_capped() {
        let mut log = Vec::new();
        for i in 0..4 {
            let entry = AuditEntry::new(
                ts(i),
                "NAKES-01",
                "Bd. Ratna",
                "ANC_VISIT",
                "ANC",
                "Pemeriksaan ANC",
            );
            push_audit(&mut log, entry, 2);
        }

        assert_eq!(log.len(), 2);
        assert_eq!(log[0].timestamp, ts(3));
        assert_eq!(log[0].action, "ANC_VISIT");
    }
}
