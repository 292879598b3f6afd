#[cfg(test)]
mod tests {
    use anc_register::models::collections::ModelCollection;
    use anc_register::models::types::FetalMovement;
    use anc_register::models::visit::VisitCollection;
    use anc_register::utils::test_utils::{fixed_today, sample_visit};
    use chrono::Duration;

    #[test]
    fn test_visit_vitals_subset() {
        let visit = sample_visit("v1", "ANC-2026-0001", fixed_today());
        let vitals = visit.vitals();

        assert_eq!(vitals.blood_pressure, "120/80");
        assert_eq!(vitals.fetal_heart_rate, Some(140));
        assert!(vitals.danger_signs.is_empty());
        assert_eq!(vitals.fetal_movement, FetalMovement::Normal);
    }

    #[test]
    fn test_latest_for_picks_most_recent_date() {
        let mut collection = VisitCollection::new();
        collection.add(sample_visit("v1", "p1", fixed_today() - Duration::days(56)));
        collection.add(sample_visit("v2", "p1", fixed_today() - Duration::days(7)));
        collection.add(sample_visit("v3", "p1", fixed_today() - Duration::days(28)));
        collection.add(sample_visit("v4", "p2", fixed_today()));

        let latest = collection.latest_for("p1").unwrap();
        assert_eq!(latest.id, "v2");
    }

    #[test]
    fn test_latest_for_same_date_prefers_last_recorded() {
        let mut collection = VisitCollection::new();
        collection.add(sample_visit("morning", "p1", fixed_today()));
        collection.add(sample_visit("afternoon", "p1", fixed_today()));

        assert_eq!(collection.latest_for("p1").unwrap().id, "afternoon");
    }

    #[test]
    fn test_latest_for_unknown_patient_is_none() {
        let collection = VisitCollection::new();
        assert!(collection.latest_for("nobody").is_none());
    }

    #[test]
    fn test_for_patient_keeps_insertion_order() {
        let mut collection = VisitCollection::new();
        collection.add(sample_visit("v1", "p1", fixed_today() - Duration::days(28)));
        collection.add(sample_visit("v2", "p1", fixed_today()));

        let visits = collection.for_patient("p1");
        assert_eq!(visits.len(), 2);
        assert_eq!(visits[0].id, "v1");
        assert_eq!(visits[1].id, "v2");
    }

    #[test]
    fn test_remove_visit() {
        let mut collection = VisitCollection::new();
        collection.add(sample_visit("v1", "p1", fixed_today()));
        collection.add(sample_visit("v2", "p1", fixed_today()));

        let removed = collection.remove("v1");
        assert!(removed.is_some());
        assert_eq!(collection.count(), 1);
        assert!(collection.get(&"v1".to_string()).is_none());
        assert!(collection.remove("v1").is_none());
    }
}
