//! Console output utilities
//!
//! This module provides formatted console output for the register,
//! including the presentation mapping from triage tiers to display
//! styles. The mapping lives here, beside the output surface, so the
//! classifier itself stays free of display concerns.

use crate::algorithm::risk::TriageLabel;
use crate::algorithm::worklist::{DashboardStats, WorklistEntry};
use crate::store::RegisterSnapshot;

const STYLE_RESET: &str = "\x1b[0m";

/// ANSI display style for a triage tier
#[must_use]
pub const fn triage_style(label: TriageLabel) -> &'static str {
    match label {
        TriageLabel::Hitam => "\x1b[97;40m",
        TriageLabel::Merah => "\x1b[97;41m",
        TriageLabel::Kuning => "\x1b[30;43m",
        TriageLabel::Hijau => "\x1b[97;42m",
    }
}

/// Print summary information about a loaded snapshot
pub fn print_snapshot_summary(snapshot: &RegisterSnapshot, elapsed: std::time::Duration) {
    println!(
        "Loaded {} patients and {} visits in {:?}",
        snapshot.patients.len(),
        snapshot.visits.len(),
        elapsed
    );
    println!("Unread alerts: {}", snapshot.alerts.iter().filter(|a| !a.is_read).count());
}

/// Print the dashboard headline counts
pub fn print_dashboard_stats(stats: &DashboardStats) {
    println!("Patients on register: {}", stats.total_patients);
    println!("Active pregnancies:   {}", stats.active_pregnancies);
    println!("Recorded deliveries:  {}", stats.deliveries);
    println!("Emergency cases:      {}", stats.emergencies);
}

/// Print the priority worklist, most urgent first
pub fn print_worklist(entries: &[WorklistEntry]) {
    if entries.is_empty() {
        println!("No patients currently require urgent attention");
        return;
    }
    println!("Priority worklist ({} patients):", entries.len());
    for entry in entries {
        let last_seen = entry
            .latest_visit
            .as_ref()
            .map_or_else(|| "never examined".to_string(), |v| v.visit_date.to_string());
        println!(
            "  {}{}{} {} - {} (last visit: {})",
            triage_style(entry.label),
            entry.label,
            STYLE_RESET,
            entry.patient.name,
            entry.label.description(),
            last_seen
        );
    }
}
