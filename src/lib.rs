//! A Rust library for antenatal-care case management: patient and visit
//! records, screening risk scoring, gestational-age calculation, tiered
//! triage classification, and a JSON snapshot store.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::RegisterConfig;
pub use error::{RegisterError, Result};
pub use models::{
    AncVisit, AuditEntry, DeliveryOutcome, Patient, PatientCollection, SystemAlert,
    VisitCollection, VisitVitals,
};

// Decision logic
pub use algorithm::fetal_size::{FetalSize, fetal_size_for_week};
pub use algorithm::gestation::{GestationProgress, Trimester, current_progress, progress_at};
pub use algorithm::risk::{TriageLabel, assess, classify};
pub use algorithm::worklist::{DashboardStats, dashboard_stats, priority_worklist};

// Persistence
pub use store::{RegisterSnapshot, load_snapshot, save_snapshot};
