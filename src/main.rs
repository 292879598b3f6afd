use anc_register::utils::console::{print_dashboard_stats, print_snapshot_summary, print_worklist};
use anc_register::{
    AncVisit, DeliveryOutcome, Patient, RegisterConfig, RegisterSnapshot, current_progress,
    dashboard_stats, fetal_size_for_week, load_snapshot, priority_worklist, save_snapshot,
};
use anc_register::models::types::{FetalMovement, InfantSex};
use anyhow::Context;
use chrono::{Duration, Local, NaiveDate};
use log::{info, warn};
use std::path::PathBuf;
use std::time::Instant;

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let path = std::env::args()
        .nth(1)
        .map_or_else(|| PathBuf::from("anc_register.json"), PathBuf::from);

    if !path.exists() {
        warn!("Snapshot not found: {}", path.display());
        info!("Creating a demo register so there is something to show");
        save_snapshot(&path, &demo_snapshot(Local::now().date_naive()))
            .context("failed to write demo snapshot")?;
    }

    info!("Loading register data from: {}", path.display());
    let start = Instant::now();
    let snapshot = load_snapshot(&path, &RegisterConfig::default())
        .context("failed to load register snapshot")?;
    print_snapshot_summary(&snapshot, start.elapsed());

    let patients = snapshot.patient_collection();
    let visits = snapshot.visit_collection();

    print_dashboard_stats(&dashboard_stats(&patients, &visits));
    print_worklist(&priority_worklist(&patients, &visits));

    for patient in patients.undelivered() {
        if let Some(progress) = current_progress(patient.lmp_date) {
            let size = fetal_size_for_week(progress.weeks);
            info!(
                "{}: week {} of 40 ({}%), due {}, size of {}",
                patient.name,
                progress.weeks,
                progress.percent_complete,
                progress.due_date,
                size.name
            );
        } else {
            info!("{}: gestational progress unavailable", patient.name);
        }
    }

    Ok(())
}

/// Build a small register for first-run demonstrations
fn demo_snapshot(today: NaiveDate) -> RegisterSnapshot {
    let mut snapshot = RegisterSnapshot::new();

    let low_risk = Patient::new("ANC-2026-1001".to_string(), "Ny. Sari Dewi".to_string())
        .with_pregnancy(Some(today - Duration::days(98)), 1, 0, 0);

    let high_score = Patient::new("ANC-2026-1002".to_string(), "Ny. Rina Wati".to_string())
        .with_pregnancy(Some(today - Duration::days(182)), 4, 3, 0)
        .with_risk_factors(vec!["PARITY_HIGH".to_string(), "HYPERTENSION".to_string()]);

    let emergency = Patient::new("ANC-2026-1003".to_string(), "Ny. Lestari Putri".to_string())
        .with_pregnancy(Some(today - Duration::days(238)), 2, 1, 0);
    let emergency_visit = AncVisit::new(
        "v-1003-1".to_string(),
        emergency.id.clone(),
        today - Duration::days(3),
    )
    .with_measurements(Some(64.0), "170/95".to_string(), Some(30.0), Some(144), Some(10.9))
    .with_observations(
        "Pusing sejak kemarin".to_string(),
        vec!["Pusing Hebat".to_string()],
        true,
        FetalMovement::Normal,
    );

    let mut delivered = Patient::new("ANC-2025-0910".to_string(), "Ny. Ayu Kartika".to_string())
        .with_pregnancy(Some(today - Duration::days(300)), 2, 1, 0);
    delivered.record_delivery(DeliveryOutcome::new(
        "birth-0910-1".to_string(),
        today - Duration::days(20),
        InfantSex::Female,
        3100,
        49,
    ));

    snapshot.visits.push(emergency_visit);
    snapshot.patients.extend([low_risk, high_score, emergency, delivered]);
    snapshot
}
