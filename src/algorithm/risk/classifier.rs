//! Triage classification for antenatal risk
//!
//! This module implements the tiered triage decision used across the
//! register: a patient's accumulated screening score places her in one of
//! three score tiers (HIJAU / KUNING / MERAH), and the latest visit's
//! vitals can override any score tier with the clinical-emergency tier
//! (HITAM).
//!
//! The decision is a fixed first-match-wins sequence: the emergency
//! override is evaluated before any score threshold, so an acute finding
//! always outranks a merely elevated chronic score. The function is total;
//! malformed input degrades to "no trigger", never to an error.

use crate::models::types::FetalMovement;
use crate::models::visit::VisitVitals;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Base screening score carried by every pregnancy regardless of factors
pub const BASE_SCREENING_SCORE: i32 = 2;

/// Total score at or above which a pregnancy is very high risk (KRST)
pub const VERY_HIGH_RISK_THRESHOLD: i32 = 12;

/// Total score at or above which a pregnancy is high risk (KRT)
pub const HIGH_RISK_THRESHOLD: i32 = 6;

/// Systolic pressure (mmHg) at or above which a hypertensive crisis is assumed
pub const SYSTOLIC_CRISIS_MIN: u32 = 160;

/// Diastolic pressure (mmHg) at or above which a hypertensive crisis is assumed
pub const DIASTOLIC_CRISIS_MIN: u32 = 110;

/// Pressure readings at or above this ceiling are sentinel garbage, not data
pub const BP_SANITY_CEILING: u32 = 500;

/// Lower bound of the normal fetal heart rate range (exclusive trigger: < 120)
pub const FETAL_HEART_RATE_MIN: i32 = 120;

/// Upper bound of the normal fetal heart rate range (exclusive trigger: > 160)
pub const FETAL_HEART_RATE_MAX: i32 = 160;

/// Assumed fetal heart rate when none was measured; never triggers
pub const DEFAULT_FETAL_HEART_RATE: i32 = 140;

/// Danger signs that define an obstetric emergency on their own.
///
/// "Demam" (fever) is offered on the visit form but deliberately excluded
/// here: fever alone is not emergency-defining.
pub const FATAL_DANGER_SIGNS: [&str; 5] = [
    "Perdarahan",
    "Ketuban Pecah",
    "Kejang",
    "Pusing Hebat",
    "Nyeri Perut Hebat",
];

/// Triage tier of a pregnancy, ordered by clinical urgency.
///
/// Variant order is the urgency order; deriving `Ord` therefore sorts a
/// worklist most-urgent first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TriageLabel {
    /// Clinical emergency, refer immediately (override tier)
    #[serde(rename = "HITAM")]
    Hitam,
    /// Very high risk (KRST), total score >= 12
    #[serde(rename = "MERAH")]
    Merah,
    /// High risk (KRT), total score 6-11
    #[serde(rename = "KUNING")]
    Kuning,
    /// Low risk (KRR), base-score pregnancies
    #[serde(rename = "HIJAU")]
    Hijau,
}

impl TriageLabel {
    /// Worklist priority, 0 = most urgent
    #[must_use]
    pub const fn priority(self) -> u8 {
        match self {
            Self::Hitam => 0,
            Self::Merah => 1,
            Self::Kuning => 2,
            Self::Hijau => 3,
        }
    }

    /// Clinical description shown alongside the tier
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Hitam => "KRITIS / EMERGENCY - RUJUK SEGERA",
            Self::Merah => "Risiko Sangat Tinggi (KRST)",
            Self::Kuning => "Risiko Tinggi (KRT)",
            Self::Hijau => "Risiko Rendah (KRR)",
        }
    }

    /// Whether this tier raises a system alert (HITAM or MERAH)
    #[must_use]
    pub const fn is_critical(self) -> bool {
        matches!(self, Self::Hitam | Self::Merah)
    }
}

impl fmt::Display for TriageLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Hitam => "HITAM",
            Self::Merah => "MERAH",
            Self::Kuning => "KUNING",
            Self::Hijau => "HIJAU",
        };
        write!(f, "{name}")
    }
}

/// Parse a "SYS/DIA" blood-pressure string into its halves.
///
/// Each half is parsed independently; a half that is missing, non-numeric,
/// or at/above [`BP_SANITY_CEILING`] is reported as `None`. An absent half
/// can therefore never satisfy an emergency threshold.
#[must_use]
pub fn parse_blood_pressure(text: &str) -> (Option<u32>, Option<u32>) {
    let mut parts = text.splitn(2, '/');
    let systolic = parts.next().and_then(parse_pressure);
    let diastolic = parts.next().and_then(parse_pressure);
    (systolic, diastolic)
}

fn parse_pressure(part: &str) -> Option<u32> {
    part.trim()
        .parse::<u32>()
        .ok()
        .filter(|value| *value < BP_SANITY_CEILING)
}

/// Whether the vitals of a visit constitute a clinical emergency.
///
/// Any single trigger is sufficient: hypertensive crisis (systolic >= 160
/// or diastolic >= 110), a fatal danger sign, absent fetal movement, or a
/// fetal heart rate outside the normal 120-160 range.
#[must_use]
pub fn is_clinical_emergency(vitals: &VisitVitals) -> bool {
    let (systolic, diastolic) = parse_blood_pressure(&vitals.blood_pressure);
    if systolic.is_some_and(|sys| sys >= SYSTOLIC_CRISIS_MIN) {
        return true;
    }
    if diastolic.is_some_and(|dia| dia >= DIASTOLIC_CRISIS_MIN) {
        return true;
    }
    if vitals
        .danger_signs
        .iter()
        .any(|sign| FATAL_DANGER_SIGNS.contains(&sign.as_str()))
    {
        return true;
    }
    if vitals.fetal_movement == FetalMovement::Absent {
        return true;
    }
    let heart_rate = vitals.fetal_heart_rate.unwrap_or(DEFAULT_FETAL_HEART_RATE);
    heart_rate < FETAL_HEART_RATE_MIN || heart_rate > FETAL_HEART_RATE_MAX
}

/// Classify a pregnancy into its triage tier.
///
/// `risk_factor_score` is the summed catalog score of the patient's
/// selected screening factors; `vitals` is the latest visit's clinical
/// subset, or `None` when classifying at registration time.
///
/// Evaluation order is fixed and first-match-wins:
/// 1. emergency override (HITAM) when vitals are supplied,
/// 2. MERAH at total >= 12,
/// 3. KUNING at total >= 6,
/// 4. HIJAU otherwise,
/// where `total` is the factor score plus [`BASE_SCREENING_SCORE`].
#[must_use]
pub fn classify(risk_factor_score: i32, vitals: Option<&VisitVitals>) -> TriageLabel {
    if let Some(vitals) = vitals {
        if is_clinical_emergency(vitals) {
            return TriageLabel::Hitam;
        }
    }

    let total = risk_factor_score + BASE_SCREENING_SCORE;
    if total >= VERY_HIGH_RISK_THRESHOLD {
        TriageLabel::Merah
    } else if total >= HIGH_RISK_THRESHOLD {
        TriageLabel::Kuning
    } else {
        TriageLabel::Hijau
    }
}
