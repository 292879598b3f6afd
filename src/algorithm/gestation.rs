//! Gestational-age and pregnancy-progress calculation
//!
//! This module converts a last-menstrual-period date (HPHT) into a
//! progress snapshot: elapsed days/weeks/months, the estimated delivery
//! date (Naegele's rule), and a percent-complete for progress displays.
//!
//! The snapshot is a view, never stored: it is recomputed from the LMP
//! date on every read and changes daily without any write to the patient
//! record. "Today" is an explicit parameter so the math is deterministic
//! under test.

use chrono::{Duration, Local, NaiveDate};

/// Full-term pregnancy length in days (40 weeks from LMP)
pub const TERM_DAYS: i64 = 280;

/// Average days per month used for the obstetric month count.
///
/// Deliberately an approximation, not calendar-month arithmetic.
const DAYS_PER_MONTH: f64 = 30.417;

/// Derived progress snapshot for an ongoing pregnancy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GestationProgress {
    /// Whole days elapsed since the LMP date
    pub total_days: i64,
    /// Whole weeks elapsed
    pub weeks: i64,
    /// Obstetric months elapsed (total days / 30.417, floored)
    pub months: i64,
    /// Estimated delivery date (HPL): LMP + 280 days
    pub due_date: NaiveDate,
    /// Progress towards term, rounded and clamped to 0-100
    pub percent_complete: u8,
}

impl GestationProgress {
    /// Trimester the pregnancy is currently in
    #[must_use]
    pub const fn trimester(&self) -> Trimester {
        Trimester::from_weeks(self.weeks)
    }
}

/// Pregnancy trimester derived from gestational weeks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trimester {
    /// Weeks 0-13
    First,
    /// Weeks 14-26
    Second,
    /// Week 27 onwards
    Third,
}

impl Trimester {
    /// Derive the trimester from whole gestational weeks
    #[must_use]
    pub const fn from_weeks(weeks: i64) -> Self {
        if weeks <= 13 {
            Self::First
        } else if weeks <= 26 {
            Self::Second
        } else {
            Self::Third
        }
    }

    /// Standing advisory text shown to the patient for this trimester
    #[must_use]
    pub const fn advice(self) -> &'static str {
        match self {
            Self::First => {
                "Trimester 1: Fokus pada asupan Asam Folat untuk perkembangan saraf janin. \
                 Istirahat cukup jika sering mual (morning sickness)."
            }
            Self::Second => {
                "Trimester 2: Mulai hitung gerakan janin. Konsumsi kalsium tinggi untuk \
                 pembentukan tulang bayi dan cegah anemia dengan zat besi."
            }
            Self::Third => {
                "Trimester 3: Waspadai tanda persalinan dan Pre-eklampsia (pusing hebat/kaki \
                 bengkak). Siapkan tas persalinan dan perlengkapan bayi."
            }
        }
    }
}

/// Compute the progress snapshot for a pregnancy at a given date.
///
/// Returns `None` when the LMP date is unset or lies in the future
/// relative to `today`. Both are valid "no progress available" states
/// (an unknown LMP, or a data-entry anomaly), not errors.
#[must_use]
pub fn progress_at(lmp: Option<NaiveDate>, today: NaiveDate) -> Option<GestationProgress> {
    let lmp = lmp?;
    let total_days = (today - lmp).num_days();
    if total_days < 0 {
        return None;
    }

    let percent = (total_days as f64 / TERM_DAYS as f64 * 100.0).round();
    Some(GestationProgress {
        total_days,
        weeks: total_days / 7,
        months: (total_days as f64 / DAYS_PER_MONTH).floor() as i64,
        due_date: lmp + Duration::days(TERM_DAYS),
        percent_complete: percent.min(100.0) as u8,
    })
}

/// Compute the progress snapshot against the current local date.
///
/// Convenience wrapper for display callers; tests should use
/// [`progress_at`] with a fixed date.
#[must_use]
pub fn current_progress(lmp: Option<NaiveDate>) -> Option<GestationProgress> {
    progress_at(lmp, Local::now().date_naive())
}
