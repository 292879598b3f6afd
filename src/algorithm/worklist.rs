//! Priority worklist and dashboard aggregation
//!
//! Builds the staff-facing view of the register: which undelivered
//! patients currently classify into a critical triage tier, ordered by
//! urgency, plus the headline counts shown on the dashboard.

use crate::algorithm::risk::{self, TriageLabel};
use crate::models::patient::{Patient, PatientCollection};
use crate::models::visit::{AncVisit, VisitCollection};
use itertools::Itertools;
use std::sync::Arc;

/// One row of the priority worklist
#[derive(Debug, Clone)]
pub struct WorklistEntry {
    /// The patient requiring attention
    pub patient: Arc<Patient>,
    /// Her current triage tier
    pub label: TriageLabel,
    /// The visit the classification was based on, if any
    pub latest_visit: Option<Arc<AncVisit>>,
}

/// Build the priority worklist: undelivered patients whose current
/// classification is critical (HITAM or MERAH), most urgent first.
///
/// Each patient is classified from her recomputed screening score and her
/// most recent visit. Ties in urgency are broken by patient id so the
/// ordering is stable across runs.
#[must_use]
pub fn priority_worklist(
    patients: &PatientCollection,
    visits: &VisitCollection,
) -> Vec<WorklistEntry> {
    patients
        .undelivered()
        .into_iter()
        .map(|patient| {
            let latest_visit = visits.latest_for(&patient.id);
            let label = risk::assess(&patient, latest_visit.as_deref());
            WorklistEntry {
                patient,
                label,
                latest_visit,
            }
        })
        .filter(|entry| entry.label.is_critical())
        .sorted_by_key(|entry| (entry.label.priority(), entry.patient.id.clone()))
        .collect_vec()
}

/// Headline counts for the staff dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardStats {
    /// All patients on the register
    pub total_patients: usize,
    /// Patients still in active antenatal monitoring
    pub active_pregnancies: usize,
    /// Patients with a recorded delivery
    pub deliveries: usize,
    /// Patients currently on the priority worklist
    pub emergencies: usize,
}

/// Compute the dashboard counts for the current register state
#[must_use]
pub fn dashboard_stats(patients: &PatientCollection, visits: &VisitCollection) -> DashboardStats {
    use crate::models::collections::ModelCollection;

    let deliveries = patients.delivered().len();
    let total_patients = patients.count();
    DashboardStats {
        total_patients,
        active_pregnancies: total_patients - deliveries,
        deliveries,
        emergencies: priority_worklist(patients, visits).len(),
    }
}
