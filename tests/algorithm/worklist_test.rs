#[cfg(test)]
mod tests {
    use anc_register::algorithm::risk::TriageLabel;
    use anc_register::algorithm::worklist::{dashboard_stats, priority_worklist};
    use anc_register::models::collections::ModelCollection;
    use anc_register::models::delivery::DeliveryOutcome;
    use anc_register::models::patient::PatientCollection;
    use anc_register::models::types::InfantSex;
    use anc_register::models::visit::VisitCollection;
    use anc_register::utils::test_utils::{fixed_today, sample_patient, sample_visit};
    use chrono::Duration;

    /// Register fixture: one low-risk, one MERAH by score, one HITAM by
    /// vitals, and one delivered patient who must never appear.
    fn build_register() -> (PatientCollection, VisitCollection) {
        let mut patients = PatientCollection::new();
        let mut visits = VisitCollection::new();

        patients.add(sample_patient("ANC-2026-0001", "Ny. Sari", &[]));

        patients.add(sample_patient(
            "ANC-2026-0002",
            "Ny. Rina",
            &["HYPERTENSION", "PARITY_HIGH"],
        ));

        patients.add(sample_patient("ANC-2026-0003", "Ny. Lestari", &[]));
        let mut emergency_visit =
            sample_visit("v-em", "ANC-2026-0003", fixed_today() - Duration::days(2));
        emergency_visit.blood_pressure = "170/90".to_string();
        visits.add(emergency_visit);

        let mut delivered = sample_patient("ANC-2026-0004", "Ny. Ayu", &["HEART_DIS"]);
        delivered.record_delivery(DeliveryOutcome::new(
            "birth-1".to_string(),
            fixed_today(),
            InfantSex::Male,
            3000,
            49,
        ));
        patients.add(delivered);

        (patients, visits)
    }

    #[test]
    fn test_worklist_contains_only_critical_undelivered_patients() {
        let (patients, visits) = build_register();
        let worklist = priority_worklist(&patients, &visits);

        assert_eq!(worklist.len(), 2);
        assert!(worklist.iter().all(|e| e.label.is_critical()));
        assert!(!worklist.iter().any(|e| e.patient.id == "ANC-2026-0004"));
    }

    #[test]
    fn test_worklist_sorts_most_urgent_first() {
        let (patients, visits) = build_register();
        let worklist = priority_worklist(&patients, &visits);

        assert_eq!(worklist[0].label, TriageLabel::Hitam);
        assert_eq!(worklist[0].patient.id, "ANC-2026-0003");
        assert_eq!(worklist[1].label, TriageLabel::Merah);
        assert_eq!(worklist[1].patient.id, "ANC-2026-0002");
    }

    #[test]
    fn test_worklist_entry_carries_triggering_visit() {
        let (patients, visits) = build_register();
        let worklist = priority_worklist(&patients, &visits);

        assert_eq!(worklist[0].latest_visit.as_ref().unwrap().id, "v-em");
        // MERAH came from the score alone; no visit recorded
        assert!(worklist[1].latest_visit.is_none());
    }

    #[test]
    fn test_dashboard_stats() {
        let (patients, visits) = build_register();
        let stats = dashboard_stats(&patients, &visits);

        assert_eq!(stats.total_patients, 4);
        assert_eq!(stats.active_pregnancies, 3);
        assert_eq!(stats.deliveries, 1);
        assert_eq!(stats.emergencies, 2);
    }

    #[test]
    fn test_empty_register_has_empty_worklist() {
        let patients = PatientCollection::new();
        let visits = VisitCollection::new();

        assert!(priority_worklist(&patients, &visits).is_empty());
        let stats = dashboard_stats(&patients, &visits);
        assert_eq!(stats.total_patients, 0);
        assert_eq!(stats.emergencies, 0);
    }
}
