//! Risk scoring and triage classification
//!
//! This module combines the static screening catalog with the tiered
//! triage classifier. The catalog scores a patient's selected risk
//! factors; the classifier turns that score, plus the latest visit's
//! vitals, into a triage tier.

pub mod catalog;
pub mod classifier;

pub use catalog::RiskFactor;
pub use classifier::{TriageLabel, classify, is_clinical_emergency, parse_blood_pressure};

use crate::models::patient::Patient;
use crate::models::visit::AncVisit;

/// Classify a patient from her record and optional latest visit.
///
/// The screening score is recomputed from the catalog rather than read
/// from the persisted `total_risk_score` field, so a stale stored value
/// cannot skew triage.
#[must_use]
pub fn assess(patient: &Patient, latest_visit: Option<&AncVisit>) -> TriageLabel {
    let vitals = latest_visit.map(AncVisit::vitals);
    classify(patient.risk_factor_score(), vitals.as_ref())
}
