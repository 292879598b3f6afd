//! Antenatal visit entity model
//!
//! This module contains the `AncVisit` model, representing one antenatal
//! care examination, and the `VisitVitals` subset consumed by the triage
//! classifier. A visit records the measurements taken by the midwife
//! (weight, blood pressure, fundal height, fetal heart rate, haemoglobin)
//! together with observed danger signs and the follow-up plan.

use crate::models::collections::ModelCollection;
use crate::models::traits::EntityModel;
use crate::models::types::{FetalMovement, FollowUpPlan, VisitStatus};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// Representation of a single antenatal care examination
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AncVisit {
    /// Visit identifier
    pub id: String,
    /// Register id of the examined patient
    pub patient_id: String,
    /// Date the examination took place
    pub visit_date: NaiveDate,
    /// Date the examination was originally scheduled for
    pub scheduled_date: NaiveDate,
    /// Agreed date of the next control visit
    pub next_visit_date: Option<NaiveDate>,
    /// Maternal weight in kilograms
    pub weight_kg: Option<f64>,
    /// Blood pressure as entered, "SYS/DIA" (e.g. "120/80")
    #[serde(default)]
    pub blood_pressure: String,
    /// Fundal height (TFU) in centimetres; collected but not used by triage
    pub fundal_height_cm: Option<f64>,
    /// Fetal heart rate (DJJ) in beats per minute
    pub fetal_heart_rate: Option<i32>,
    /// Haemoglobin in g/dL
    pub haemoglobin: Option<f64>,
    /// Free-text complaints reported by the patient
    #[serde(default)]
    pub complaints: String,
    /// Danger-sign tokens observed during the examination
    #[serde(default)]
    pub danger_signs: Vec<String>,
    /// Whether edema was observed
    #[serde(default)]
    pub edema: bool,
    /// Reported fetal movement
    pub fetal_movement: FetalMovement,
    /// Follow-up plan decided by the midwife
    pub follow_up: FollowUpPlan,
    /// Free-text notes by the attending staff
    #[serde(default)]
    pub staff_notes: String,
    /// Id of the attending staff member
    #[serde(default)]
    pub staff_id: String,
    /// Lifecycle status of the record
    pub status: VisitStatus,
}

impl AncVisit {
    /// Create a new completed visit record with no measurements yet
    #[must_use]
    pub const fn new(id: String, patient_id: String, visit_date: NaiveDate) -> Self {
        Self {
            id,
            patient_id,
            visit_date,
            scheduled_date: visit_date,
            next_visit_date: None,
            weight_kg: None,
            blood_pressure: String::new(),
            fundal_height_cm: None,
            fetal_heart_rate: None,
            haemoglobin: None,
            complaints: String::new(),
            danger_signs: Vec::new(),
            edema: false,
            fetal_movement: FetalMovement::Normal,
            follow_up: FollowUpPlan::RoutineControl,
            staff_notes: String::new(),
            staff_id: String::new(),
            status: VisitStatus::Completed,
        }
    }

    /// Set the measured vitals
    #[must_use]
    pub fn with_measurements(
        mut self,
        weight_kg: Option<f64>,
        blood_pressure: String,
        fundal_height_cm: Option<f64>,
        fetal_heart_rate: Option<i32>,
        haemoglobin: Option<f64>,
    ) -> Self {
        self.weight_kg = weight_kg;
        self.blood_pressure = blood_pressure;
        self.fundal_height_cm = fundal_height_cm;
        self.fetal_heart_rate = fetal_heart_rate;
        self.haemoglobin = haemoglobin;
        self
    }

    /// Set the clinical observations
    #[must_use]
    pub fn with_observations(
        mut self,
        complaints: String,
        danger_signs: Vec<String>,
        edema: bool,
        fetal_movement: FetalMovement,
    ) -> Self {
        self.complaints = complaints;
        self.danger_signs = danger_signs;
        self.edema = edema;
        self.fetal_movement = fetal_movement;
        self
    }

    /// Set the follow-up plan and staff attribution
    #[must_use]
    pub fn with_plan(
        mut self,
        follow_up: FollowUpPlan,
        next_visit_date: Option<NaiveDate>,
        staff_notes: String,
        staff_id: String,
    ) -> Self {
        self.follow_up = follow_up;
        self.next_visit_date = next_visit_date;
        self.staff_notes = staff_notes;
        self.staff_id = staff_id;
        self
    }

    /// Extract the subset of this visit consumed by the triage classifier
    #[must_use]
    pub fn vitals(&self) -> VisitVitals {
        VisitVitals {
            blood_pressure: self.blood_pressure.clone(),
            fetal_heart_rate: self.fetal_heart_rate,
            danger_signs: self.danger_signs.clone(),
            fetal_movement: self.fetal_movement,
        }
    }
}

impl EntityModel for AncVisit {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn key(&self) -> String {
        format!("{}:{}", self.patient_id, self.id)
    }
}

/// The clinical subset of a visit used for emergency triage.
///
/// A classification may also be requested from an in-progress visit draft
/// before anything is saved, so this is a standalone value type rather than
/// a borrowed view of `AncVisit`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisitVitals {
    /// Blood pressure text, "SYS/DIA"
    pub blood_pressure: String,
    /// Fetal heart rate in beats per minute, if measured
    pub fetal_heart_rate: Option<i32>,
    /// Observed danger-sign tokens
    pub danger_signs: Vec<String>,
    /// Reported fetal movement
    pub fetal_movement: FetalMovement,
}

impl Default for VisitVitals {
    fn default() -> Self {
        Self {
            blood_pressure: String::new(),
            fetal_heart_rate: None,
            danger_signs: Vec::new(),
            fetal_movement: FetalMovement::Normal,
        }
    }
}

/// A collection of visits that can be efficiently queried per patient
#[derive(Debug, Default)]
pub struct VisitCollection {
    /// Visits grouped by patient id, in insertion order
    visits_by_patient: HashMap<String, Vec<Arc<AncVisit>>>,
}

impl VisitCollection {
    /// Create a new empty `VisitCollection`
    #[must_use]
    pub fn new() -> Self {
        Self {
            visits_by_patient: HashMap::new(),
        }
    }

    /// Get all visits for a patient, in insertion order
    #[must_use]
    pub fn for_patient(&self, patient_id: &str) -> Vec<Arc<AncVisit>> {
        self.visits_by_patient
            .get(patient_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Get the most recent visit for a patient by visit date.
    ///
    /// When several visits share the latest date, the one recorded last
    /// wins.
    #[must_use]
    pub fn latest_for(&self, patient_id: &str) -> Option<Arc<AncVisit>> {
        self.visits_by_patient
            .get(patient_id)?
            .iter()
            .max_by_key(|visit| visit.visit_date)
            .cloned()
    }

    /// Remove a visit by id, returning the removed record if present
    pub fn remove(&mut self, visit_id: &str) -> Option<Arc<AncVisit>> {
        for visits in self.visits_by_patient.values_mut() {
            if let Some(pos) = visits.iter().position(|v| v.id == visit_id) {
                return Some(visits.remove(pos));
            }
        }
        None
    }
}

impl ModelCollection<AncVisit> for VisitCollection {
    fn add(&mut self, visit: AncVisit) {
        let patient_id = visit.patient_id.clone();
        self.visits_by_patient
            .entry(patient_id)
            .or_default()
            .push(Arc::new(visit));
    }

    fn get(&self, id: &String) -> Option<Arc<AncVisit>> {
        self.visits_by_patient
            .values()
            .flatten()
            .find(|visit| visit.id == *id)
            .cloned()
    }

    fn all(&self) -> Vec<Arc<AncVisit>> {
        self.visits_by_patient
            .values()
            .flatten()
            .cloned()
            .collect()
    }

    fn filter<F>(&self, predicate: F) -> Vec<Arc<AncVisit>>
    where
        F: Fn(&AncVisit) -> bool,
    {
        self.visits_by_patient
            .values()
            .flatten()
            .filter(|visit| predicate(visit))
            .cloned()
            .collect()
    }

    fn count(&self) -> usize {
        self.visits_by_patient.values().map(Vec::len).sum()
    }
}
