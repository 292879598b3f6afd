//! Fetal size lookup by gestational week
//!
//! Maps whole gestational weeks to the familiar fruit-comparison shown on
//! the patient dashboard. A fixed ascending threshold table; weeks at or
//! below zero fall into the smallest bucket.

/// Descriptive size comparison for the current gestational week
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetalSize {
    /// Comparison object, e.g. "Buah Lemon"
    pub name: &'static str,
    /// Display icon for the comparison
    pub icon: &'static str,
}

/// Look up the size comparison for a gestational week
#[must_use]
pub const fn fetal_size_for_week(weeks: i64) -> FetalSize {
    if weeks <= 4 {
        FetalSize { name: "Biji Poppy", icon: "🌱" }
    } else if weeks <= 8 {
        FetalSize { name: "Buah Raspberry", icon: "🫐" }
    } else if weeks <= 12 {
        FetalSize { name: "Buah Lemon", icon: "🍋" }
    } else if weeks <= 16 {
        FetalSize { name: "Buah Alpukat", icon: "🥑" }
    } else if weeks <= 20 {
        FetalSize { name: "Buah Pisang", icon: "🍌" }
    } else if weeks <= 24 {
        FetalSize { name: "Buah Jagung", icon: "🌽" }
    } else if weeks <= 28 {
        FetalSize { name: "Buah Terong", icon: "🍆" }
    } else if weeks <= 32 {
        FetalSize { name: "Buah Kelapa", icon: "🥥" }
    } else if weeks <= 36 {
        FetalSize { name: "Buah Melon", icon: "🍈" }
    } else {
        FetalSize { name: "Semangka Kecil", icon: "🍉" }
    }
}
