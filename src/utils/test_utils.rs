//! Shared fixtures for unit and integration tests

use crate::models::patient::Patient;
use crate::models::types::{FetalMovement, FollowUpPlan};
use crate::models::visit::{AncVisit, VisitVitals};
use chrono::NaiveDate;

/// Fixed "today" used across tests for deterministic date math
#[must_use]
pub fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 10).unwrap()
}

/// Create a registered patient with the given screening factors
#[must_use]
pub fn sample_patient(id: &str, name: &str, factor_ids: &[&str]) -> Patient {
    Patient::new(id.to_string(), name.to_string())
        .with_birth_date(NaiveDate::from_ymd_opt(1996, 5, 20).unwrap())
        .with_contact(
            "081234567890".to_string(),
            "Jl. Melati No. 3".to_string(),
            "Pasar Minggu".to_string(),
            "Jati Padang".to_string(),
        )
        .with_pregnancy(
            Some(fixed_today() - chrono::Duration::days(140)),
            2,
            1,
            0,
        )
        .with_risk_factors(factor_ids.iter().map(ToString::to_string).collect())
}

/// Create a completed visit with unremarkable vitals
#[must_use]
pub fn sample_visit(id: &str, patient_id: &str, visit_date: NaiveDate) -> AncVisit {
    AncVisit::new(id.to_string(), patient_id.to_string(), visit_date)
        .with_measurements(Some(58.5), "120/80".to_string(), Some(24.0), Some(140), Some(11.8))
        .with_observations(String::new(), Vec::new(), false, FetalMovement::Normal)
        .with_plan(
            FollowUpPlan::RoutineControl,
            Some(visit_date + chrono::Duration::days(28)),
            String::new(),
            "NAKES-01".to_string(),
        )
}

/// Vitals that trigger no emergency branch
#[must_use]
pub fn normal_vitals() -> VisitVitals {
    VisitVitals {
        blood_pressure: "120/80".to_string(),
        fetal_heart_rate: Some(140),
        danger_signs: Vec::new(),
        fetal_movement: FetalMovement::Normal,
    }
}
