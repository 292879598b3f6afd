//! Screening risk-factor catalog
//!
//! This module holds the authoritative, static table of clinical risk
//! indicators used for antenatal screening (the SPR score sheet). Factors
//! are grouped into three tiers by magnitude: tier-I demographic and
//! historical indicators at 4 points, and active medical/obstetric
//! complications at 8 and 12 points.
//!
//! Lookups are lenient: an identifier not present in the catalog scores
//! zero, it never fails. Enumeration order is the fixed order of the score
//! sheet and carries no scoring significance.

use crate::models::types::{RiskGroup, RiskLevel};

/// One clinical risk indicator in the screening catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskFactor {
    /// Stable identifier used on patient records
    pub id: &'static str,
    /// Display label (form checklist text)
    pub label: &'static str,
    /// Points contributed to the screening score
    pub score: i32,
    /// Screening group of the indicator
    pub group: RiskGroup,
    /// Severity tier of the indicator
    pub level: RiskLevel,
}

/// The screening score sheet, in display order
static RISK_FACTORS: [RiskFactor; 13] = [
    // Faktor Risiko I (4 points)
    RiskFactor {
        id: "AGE_EXTREME",
        label: "Usia Terlalu Muda <20 / Tua >35 thn",
        score: 4,
        group: RiskGroup::Obstetric,
        level: RiskLevel::Low,
    },
    RiskFactor {
        id: "PARITY_HIGH",
        label: "Anak Banyak (>= 4)",
        score: 4,
        group: RiskGroup::Obstetric,
        level: RiskLevel::Low,
    },
    RiskFactor {
        id: "HEIGHT_LOW",
        label: "Tinggi Badan Rendah (<145 cm)",
        score: 4,
        group: RiskGroup::Medical,
        level: RiskLevel::Low,
    },
    RiskFactor {
        id: "SHORT_PREG",
        label: "Jarak Hamil Terlalu Dekat (<2 thn)",
        score: 4,
        group: RiskGroup::Obstetric,
        level: RiskLevel::Low,
    },
    RiskFactor {
        id: "ANEMIA",
        label: "Anemia (Hb <11 g/dL)",
        score: 4,
        group: RiskGroup::Medical,
        level: RiskLevel::Low,
    },
    // Faktor Risiko II (8 points)
    RiskFactor {
        id: "HISTORY_SC",
        label: "Riwayat Sesar (SC) Sebelumnya",
        score: 8,
        group: RiskGroup::Obstetric,
        level: RiskLevel::High,
    },
    RiskFactor {
        id: "HYPERTENSION",
        label: "Hipertensi (Tekanan Darah Tinggi)",
        score: 8,
        group: RiskGroup::Medical,
        level: RiskLevel::High,
    },
    RiskFactor {
        id: "TWINS",
        label: "Hamil Kembar (Gemelli)",
        score: 8,
        group: RiskGroup::Obstetric,
        level: RiskLevel::High,
    },
    RiskFactor {
        id: "POSITION_BAD",
        label: "Kelainan Letak (Sungsang/Lintang)",
        score: 8,
        group: RiskGroup::Obstetric,
        level: RiskLevel::High,
    },
    // Faktor Risiko III (12 points)
    RiskFactor {
        id: "HEART_DIS",
        label: "Penyakit Jantung / Gagal Ginjal",
        score: 12,
        group: RiskGroup::Medical,
        level: RiskLevel::Extreme,
    },
    RiskFactor {
        id: "DIABETES",
        label: "Diabetes Melitus (Gula Darah)",
        score: 12,
        group: RiskGroup::Medical,
        level: RiskLevel::Extreme,
    },
    RiskFactor {
        id: "PRE_ECLAMPSIA",
        label: "Pre-Eklampsia Berat / Eklampsia",
        score: 12,
        group: RiskGroup::Medical,
        level: RiskLevel::Extreme,
    },
    RiskFactor {
        id: "HEMORRHAGE",
        label: "Riwayat Perdarahan Hebat",
        score: 12,
        group: RiskGroup::Obstetric,
        level: RiskLevel::Extreme,
    },
];

/// Get the full catalog in its fixed display order
#[must_use]
pub fn all() -> &'static [RiskFactor] {
    &RISK_FACTORS
}

/// Look up a factor definition by identifier
#[must_use]
pub fn get(id: &str) -> Option<&'static RiskFactor> {
    RISK_FACTORS.iter().find(|factor| factor.id == id)
}

/// Get the score of a factor by identifier.
///
/// Identifiers not present in the catalog score zero.
#[must_use]
pub fn score_of(id: &str) -> i32 {
    get(id).map_or(0, |factor| factor.score)
}

/// Sum the catalog scores of a set of selected factor identifiers.
///
/// Unknown identifiers contribute zero.
#[must_use]
pub fn sum_scores<S: AsRef<str>>(factor_ids: &[S]) -> i32 {
    factor_ids.iter().map(|id| score_of(id.as_ref())).sum()
}
