//! Common domain type definitions
//!
//! This module contains common enum types used across the domain models to
//! ensure consistency and facilitate code reuse. Conversions from raw form
//! values are lenient: unrecognized input maps to the safest default rather
//! than failing.

use serde::{Deserialize, Serialize};

/// Sex of a newborn as recorded on the delivery form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InfantSex {
    /// Male (laki-laki)
    #[serde(rename = "L")]
    Male,
    /// Female (perempuan)
    #[serde(rename = "P")]
    Female,
}

impl From<&str> for InfantSex {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "p" | "perempuan" | "female" | "f" => Self::Female,
            _ => Self::Male,
        }
    }
}

/// Reported fetal movement at an antenatal visit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FetalMovement {
    /// Normal, active movement
    #[serde(rename = "Normal")]
    Normal,
    /// Reduced activity (kurang aktif)
    #[serde(rename = "Kurang Aktif")]
    Reduced,
    /// No movement detected (tidak ada) - an emergency indicator
    #[serde(rename = "Tidak Ada")]
    Absent,
}

impl From<&str> for FetalMovement {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "kurang aktif" | "reduced" => Self::Reduced,
            "tidak ada" | "absent" => Self::Absent,
            _ => Self::Normal,
        }
    }
}

/// Lifecycle status of an antenatal visit record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisitStatus {
    /// Planned but not yet performed
    #[serde(rename = "SCHEDULED")]
    Scheduled,
    /// Examination performed and recorded
    #[serde(rename = "COMPLETED")]
    Completed,
    /// Patient did not attend
    #[serde(rename = "MISSED")]
    Missed,
}

impl From<&str> for VisitStatus {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "scheduled" => Self::Scheduled,
            "missed" => Self::Missed,
            _ => Self::Completed,
        }
    }
}

/// Follow-up plan recorded by the attending midwife
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FollowUpPlan {
    /// Routine antenatal control
    #[serde(rename = "ANC_RUTIN")]
    RoutineControl,
    /// Referral to an obstetrician for consultation
    #[serde(rename = "KONSUL_DOKTER")]
    ObstetricConsult,
    /// Hospital referral (critical)
    #[serde(rename = "RUJUK_RS")]
    HospitalReferral,
}

impl From<&str> for FollowUpPlan {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "konsul_dokter" => Self::ObstetricConsult,
            "rujuk_rs" => Self::HospitalReferral,
            _ => Self::RoutineControl,
        }
    }
}

/// Condition of the mother after delivery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MotherStatus {
    /// Healthy / stable
    #[serde(rename = "SEHAT")]
    Healthy,
    /// Postpartum complication
    #[serde(rename = "KOMPLIKASI")]
    Complication,
    /// Died
    #[serde(rename = "MENINGGAL")]
    Deceased,
}

impl From<&str> for MotherStatus {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "komplikasi" => Self::Complication,
            "meninggal" => Self::Deceased,
            _ => Self::Healthy,
        }
    }
}

/// Condition of the infant after delivery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InfantStatus {
    /// Alive and healthy
    #[serde(rename = "HIDUP_SEHAT")]
    AliveWell,
    /// Alive but needs further care
    #[serde(rename = "HIDUP_KOMPLIKASI")]
    AliveNeedsCare,
    /// Died
    #[serde(rename = "MENINGGAL")]
    Deceased,
}

impl From<&str> for InfantStatus {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "hidup_komplikasi" => Self::AliveNeedsCare,
            "meninggal" => Self::Deceased,
            _ => Self::AliveWell,
        }
    }
}

/// Birth weight classification applied at delivery recording
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BirthWeightClass {
    /// 2500 g or more
    #[serde(rename = "NORMAL")]
    Normal,
    /// Low birth weight, below 2500 g (BBLR)
    #[serde(rename = "BBLR")]
    LowBirthWeight,
    /// Very low birth weight, below 1500 g (BBLSR)
    #[serde(rename = "BBLSR")]
    VeryLowBirthWeight,
}

impl BirthWeightClass {
    /// Classify a birth weight in grams (cutoffs 1500 g / 2500 g)
    #[must_use]
    pub const fn from_grams(weight_g: i32) -> Self {
        if weight_g < 1500 {
            Self::VeryLowBirthWeight
        } else if weight_g < 2500 {
            Self::LowBirthWeight
        } else {
            Self::Normal
        }
    }

    /// Get the registry code for this classification
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Normal => "NORMAL",
            Self::LowBirthWeight => "BBLR",
            Self::VeryLowBirthWeight => "BBLSR",
        }
    }
}

impl std::fmt::Display for BirthWeightClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Screening group of a risk indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskGroup {
    /// Obstetric history and pregnancy-related indicators
    #[serde(rename = "OBSTETRI")]
    Obstetric,
    /// General medical indicators
    #[serde(rename = "MEDIS")]
    Medical,
}

/// Severity tier of a risk indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    /// Demographic/historical screening indicators (4 points)
    #[serde(rename = "LOW")]
    Low,
    /// Active obstetric or medical complications (8 points)
    #[serde(rename = "HIGH")]
    High,
    /// Severe active complications (12 points)
    #[serde(rename = "EXTREME")]
    Extreme,
}
