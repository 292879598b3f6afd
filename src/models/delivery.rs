//! Delivery outcome entity model
//!
//! This module contains the `DeliveryOutcome` model, recorded when a
//! monitored pregnancy ends. The birth-weight classification (NORMAL /
//! BBLR / BBLSR) is computed at construction from the recorded weight.

use crate::models::types::{BirthWeightClass, InfantSex, InfantStatus, MotherStatus};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Outcome of a completed pregnancy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryOutcome {
    /// Outcome record identifier
    pub id: String,
    /// Date of delivery
    pub delivery_date: NaiveDate,
    /// Name given to the infant, if any
    #[serde(default)]
    pub infant_name: String,
    /// Sex of the infant
    pub infant_sex: InfantSex,
    /// Birth weight in grams
    pub birth_weight_g: i32,
    /// Birth length in centimetres
    pub birth_length_cm: i32,
    /// Condition of the mother after delivery
    pub mother_status: MotherStatus,
    /// Condition of the infant after delivery
    pub infant_status: InfantStatus,
    /// Birth-weight classification derived from `birth_weight_g`
    pub classification: BirthWeightClass,
    /// Free-text delivery notes
    #[serde(default)]
    pub notes: String,
}

impl DeliveryOutcome {
    /// Create a new delivery outcome.
    ///
    /// The birth-weight classification is derived from `birth_weight_g`
    /// using the 1500 g / 2500 g cutoffs.
    #[must_use]
    pub const fn new(
        id: String,
        delivery_date: NaiveDate,
        infant_sex: InfantSex,
        birth_weight_g: i32,
        birth_length_cm: i32,
    ) -> Self {
        Self {
            id,
            delivery_date,
            infant_name: String::new(),
            infant_sex,
            birth_weight_g,
            birth_length_cm,
            mother_status: MotherStatus::Healthy,
            infant_status: InfantStatus::AliveWell,
            classification: BirthWeightClass::from_grams(birth_weight_g),
            notes: String::new(),
        }
    }

    /// Set the infant's name
    #[must_use]
    pub fn with_infant_name(mut self, infant_name: String) -> Self {
        self.infant_name = infant_name;
        self
    }

    /// Set the post-delivery condition of mother and infant
    #[must_use]
    pub const fn with_statuses(
        mut self,
        mother_status: MotherStatus,
        infant_status: InfantStatus,
    ) -> Self {
        self.mother_status = mother_status;
        self.infant_status = infant_status;
        self
    }

    /// Set free-text delivery notes
    #[must_use]
    pub fn with_notes(mut self, notes: String) -> Self {
        self.notes = notes;
        self
    }
}
