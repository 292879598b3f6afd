#[cfg(test)]
mod tests {
    use anc_register::config::RegisterConfig;
    use anc_register::error::RegisterError;
    use anc_register::store::{RegisterSnapshot, load_snapshot, save_snapshot};
    use anc_register::utils::test_utils::{fixed_today, sample_patient, sample_visit};
    use std::fs;
    use std::path::PathBuf;

    /// Unique scratch path per test so parallel tests never collide
    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("anc_register_{}_{}.json", std::process::id(), name))
    }

    fn sample_snapshot() -> RegisterSnapshot {
        let mut snapshot = RegisterSnapshot::new();
        snapshot
            .patients
            .push(sample_patient("ANC-2026-0001", "Ny. Sari", &["ANEMIA"]));
        snapshot
            .visits
            .push(sample_visit("v1", "ANC-2026-0001", fixed_today()));
        snapshot
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let path = scratch_path("round_trip");
        let snapshot = sample_snapshot();

        save_snapshot(&path, &snapshot).unwrap();
        let loaded = load_snapshot(&path, &RegisterConfig::default()).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(loaded.version, snapshot.version);
        assert_eq!(loaded.patients.len(), 1);
        assert_eq!(loaded.patients[0].id, "ANC-2026-0001");
        assert_eq!(loaded.patients[0].total_risk_score, 4);
        assert_eq!(loaded.visits.len(), 1);
        assert_eq!(loaded.visits[0].blood_pressure, "120/80");
    }

    #[test]
    fn test_missing_file_is_a_read_error() {
        let path = scratch_path("does_not_exist");
        let result = load_snapshot(&path, &RegisterConfig::default());

        assert!(matches!(result, Err(RegisterError::SnapshotRead(_))));
    }

    #[test]
    fn test_snapshot_without_patients_is_rejected() {
        let path = scratch_path("no_patients");
        fs::write(&path, r#"{"version": "1.0.0", "visits": []}"#).unwrap();

        let result = load_snapshot(&path, &RegisterConfig::default());
        fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(RegisterError::SnapshotParse(_))));
    }

    #[test]
    fn test_malformed_json_is_a_parse_error() {
        let path = scratch_path("malformed");
        fs::write(&path, "{not json at all").unwrap();

        let result = load_snapshot(&path, &RegisterConfig::default());
        fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(RegisterError::SnapshotParse(_))));
    }

    #[test]
    fn test_version_mismatch_is_tolerated_by_default() {
        let path = scratch_path("old_version");
        let mut snapshot = sample_snapshot();
        snapshot.version = "0.9.0".to_string();
        save_snapshot(&path, &snapshot).unwrap();

        let loaded = load_snapshot(&path, &RegisterConfig::default()).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(loaded.version, "0.9.0");
    }

    #[test]
    fn test_version_mismatch_rejected_when_configured() {
        let path = scratch_path("strict_version");
        let mut snapshot = sample_snapshot();
        snapshot.version = "0.9.0".to_string();
        save_snapshot(&path, &snapshot).unwrap();

        let config = RegisterConfig {
            fail_on_version_mismatch: true,
            ..Default::default()
        };
        let result = load_snapshot(&path, &config);
        fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(RegisterError::InvalidSnapshot(_))));
    }

    #[test]
    fn test_collections_built_from_snapshot() {
        use anc_register::models::collections::ModelCollection;

        let snapshot = sample_snapshot();
        let patients = snapshot.patient_collection();
        let visits = snapshot.visit_collection();

        assert_eq!(patients.count(), 1);
        assert_eq!(visits.count(), 1);
        assert_eq!(visits.latest_for("ANC-2026-0001").unwrap().id, "v1");
    }
}
