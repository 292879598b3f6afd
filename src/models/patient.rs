//! Patient entity model
//!
//! This module contains the Patient model, representing a pregnant woman
//! enrolled in antenatal care. Patients carry their obstetric history
//! (gravida/para/abortus), the screening risk factors selected at
//! registration, and the outcome of the current and past pregnancies.

use crate::algorithm::risk::catalog;
use crate::models::collections::ModelCollection;
use crate::models::delivery::DeliveryOutcome;
use crate::models::traits::EntityModel;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// Representation of an enrolled antenatal-care patient
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    /// Register identifier (e.g. "ANC-2026-1042")
    pub id: String,
    /// Full name
    pub name: String,
    /// Date of birth
    pub birth_date: Option<NaiveDate>,
    /// Contact phone number
    #[serde(default)]
    pub phone: String,
    /// Street address
    #[serde(default)]
    pub address: String,
    /// District (kecamatan)
    #[serde(default)]
    pub district: String,
    /// Subdistrict (kelurahan)
    #[serde(default)]
    pub subdistrict: String,
    /// Geographic latitude of the home address, if tagged
    pub latitude: Option<f64>,
    /// Geographic longitude of the home address, if tagged
    pub longitude: Option<f64>,
    /// First day of the last menstrual period (HPHT); gestational age is
    /// derived from this date on every read
    pub lmp_date: Option<NaiveDate>,
    /// Total number of pregnancies including the current one (gravida)
    pub gravida: i32,
    /// Number of live births (para)
    pub para: i32,
    /// Number of miscarriages/abortions (abortus)
    pub abortus: i32,
    /// Free-text prior medical history
    #[serde(default)]
    pub medical_history: String,
    /// Identifiers of the screening risk factors selected at registration
    #[serde(default)]
    pub selected_risk_factors: Vec<String>,
    /// Sum of the selected factors' catalog scores at the time of last save
    pub total_risk_score: i32,
    /// Whether the current pregnancy has ended in a recorded delivery
    #[serde(default)]
    pub is_delivered: bool,
    /// Outcome of the current pregnancy, once delivered
    #[serde(default)]
    pub delivery: Option<DeliveryOutcome>,
    /// Outcomes of completed past pregnancies
    #[serde(default)]
    pub pregnancy_history: Vec<DeliveryOutcome>,
}

impl Patient {
    /// Create a new patient with empty history and no risk factors
    #[must_use]
    pub const fn new(id: String, name: String) -> Self {
        Self {
            id,
            name,
            birth_date: None,
            phone: String::new(),
            address: String::new(),
            district: String::new(),
            subdistrict: String::new(),
            latitude: None,
            longitude: None,
            lmp_date: None,
            gravida: 1,
            para: 0,
            abortus: 0,
            medical_history: String::new(),
            selected_risk_factors: Vec::new(),
            total_risk_score: 0,
            is_delivered: false,
            delivery: None,
            pregnancy_history: Vec::new(),
        }
    }

    /// Set contact and address details
    #[must_use]
    pub fn with_contact(
        mut self,
        phone: String,
        address: String,
        district: String,
        subdistrict: String,
    ) -> Self {
        self.phone = phone;
        self.address = address;
        self.district = district;
        self.subdistrict = subdistrict;
        self
    }

    /// Set the geographic coordinates of the home address
    #[must_use]
    pub const fn with_coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }

    /// Set the date of birth
    #[must_use]
    pub const fn with_birth_date(mut self, birth_date: NaiveDate) -> Self {
        self.birth_date = Some(birth_date);
        self
    }

    /// Set the core pregnancy parameters
    #[must_use]
    pub const fn with_pregnancy(
        mut self,
        lmp_date: Option<NaiveDate>,
        gravida: i32,
        para: i32,
        abortus: i32,
    ) -> Self {
        self.lmp_date = lmp_date;
        self.gravida = gravida;
        self.para = para;
        self.abortus = abortus;
        self
    }

    /// Set the free-text medical history
    #[must_use]
    pub fn with_medical_history(mut self, medical_history: String) -> Self {
        self.medical_history = medical_history;
        self
    }

    /// Set the selected screening risk factors.
    ///
    /// The stored `total_risk_score` is recomputed from the catalog;
    /// identifiers unknown to the catalog contribute zero.
    #[must_use]
    pub fn with_risk_factors(mut self, factor_ids: Vec<String>) -> Self {
        self.total_risk_score = catalog::sum_scores(&factor_ids);
        self.selected_risk_factors = factor_ids;
        self
    }

    /// Current risk-factor score, recomputed from the catalog.
    ///
    /// Classification never trusts the persisted `total_risk_score`; this
    /// keeps a stale stored value from skewing triage.
    #[must_use]
    pub fn risk_factor_score(&self) -> i32 {
        catalog::sum_scores(&self.selected_risk_factors)
    }

    /// Record the outcome of the current pregnancy.
    ///
    /// Marks the patient as delivered and appends the outcome to the
    /// pregnancy history.
    pub fn record_delivery(&mut self, outcome: DeliveryOutcome) {
        self.is_delivered = true;
        self.pregnancy_history.push(outcome.clone());
        self.delivery = Some(outcome);
    }

    /// Begin a new antenatal cycle after a completed pregnancy.
    ///
    /// The previous delivery outcome is archived into the pregnancy history
    /// (unless already present), the delivered flag is cleared, and gravida
    /// and para are incremented.
    pub fn start_new_pregnancy(&mut self, new_lmp: NaiveDate) {
        if let Some(previous) = self.delivery.take() {
            if !self.pregnancy_history.iter().any(|h| h.id == previous.id) {
                self.pregnancy_history.push(previous);
            }
        }
        self.lmp_date = Some(new_lmp);
        self.is_delivered = false;
        self.gravida += 1;
        self.para += 1;
    }

    /// Calculate age in whole years at a reference date
    #[must_use]
    pub fn age_at(&self, reference_date: &NaiveDate) -> Option<i32> {
        self.birth_date
            .map(|birth| ((*reference_date - birth).num_days() / 365) as i32)
    }
}

impl EntityModel for Patient {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn key(&self) -> String {
        self.id.clone()
    }
}

/// A collection of patients that can be efficiently queried
#[derive(Debug, Default)]
pub struct PatientCollection {
    /// Patients indexed by register id
    patients: HashMap<String, Arc<Patient>>,
}

impl PatientCollection {
    /// Create a new empty `PatientCollection`
    #[must_use]
    pub fn new() -> Self {
        Self {
            patients: HashMap::new(),
        }
    }

    /// Get patients still in active antenatal monitoring
    #[must_use]
    pub fn undelivered(&self) -> Vec<Arc<Patient>> {
        self.filter(|p| !p.is_delivered)
    }

    /// Get patients with a recorded delivery
    #[must_use]
    pub fn delivered(&self) -> Vec<Arc<Patient>> {
        self.filter(|p| p.is_delivered)
    }

    /// Search patients by case-insensitive name substring
    #[must_use]
    pub fn search(&self, name_fragment: &str) -> Vec<Arc<Patient>> {
        let needle = name_fragment.to_lowercase();
        self.filter(|p| p.name.to_lowercase().contains(&needle))
    }

    /// Remove a patient by id, returning the removed record if present
    pub fn remove(&mut self, id: &str) -> Option<Arc<Patient>> {
        self.patients.remove(id)
    }
}

impl ModelCollection<Patient> for PatientCollection {
    fn add(&mut self, patient: Patient) {
        self.patients.insert(patient.id.clone(), Arc::new(patient));
    }

    fn get(&self, id: &String) -> Option<Arc<Patient>> {
        self.patients.get(id).cloned()
    }

    fn all(&self) -> Vec<Arc<Patient>> {
        self.patients.values().cloned().collect()
    }

    fn filter<F>(&self, predicate: F) -> Vec<Arc<Patient>>
    where
        F: Fn(&Patient) -> bool,
    {
        self.patients
            .values()
            .filter(|patient| predicate(patient))
            .cloned()
            .collect()
    }

    fn count(&self) -> usize {
        self.patients.len()
    }
}
