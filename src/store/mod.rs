//! JSON snapshot persistence
//!
//! The register's only persistence is deliberately a single JSON blob:
//! the whole state is saved and loaded in one piece, mirroring how the
//! surrounding application exports and restores its database. There is no
//! incremental storage engine and none is wanted.
//!
//! A snapshot without a patient list does not deserialize and is rejected
//! as invalid; a snapshot from a different format version is logged and
//! accepted unless the configuration says otherwise.

use crate::config::RegisterConfig;
use crate::error::{RegisterError, Result};
use crate::models::alert::{AuditEntry, SystemAlert};
use crate::models::collections::ModelCollection;
use crate::models::patient::{Patient, PatientCollection};
use crate::models::visit::{AncVisit, VisitCollection};
use crate::utils::logging::{log_operation_complete, log_operation_start, log_warning};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Instant;

/// Format version written into new snapshots
pub const SNAPSHOT_VERSION: &str = "1.0.0";

/// The complete persisted state of the register
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterSnapshot {
    /// Snapshot format version
    pub version: String,
    /// All registered patients
    pub patients: Vec<Patient>,
    /// All recorded antenatal visits
    #[serde(default)]
    pub visits: Vec<AncVisit>,
    /// Pending and acknowledged alerts, newest first
    #[serde(default)]
    pub alerts: Vec<SystemAlert>,
    /// Audit trail, newest first
    #[serde(default)]
    pub audit_log: Vec<AuditEntry>,
}

impl RegisterSnapshot {
    /// Create an empty snapshot at the current format version
    #[must_use]
    pub fn new() -> Self {
        Self {
            version: SNAPSHOT_VERSION.to_string(),
            patients: Vec::new(),
            visits: Vec::new(),
            alerts: Vec::new(),
            audit_log: Vec::new(),
        }
    }

    /// Build the queryable patient collection from this snapshot
    #[must_use]
    pub fn patient_collection(&self) -> PatientCollection {
        let mut collection = PatientCollection::new();
        for patient in &self.patients {
            collection.add(patient.clone());
        }
        collection
    }

    /// Build the queryable visit collection from this snapshot
    #[must_use]
    pub fn visit_collection(&self) -> VisitCollection {
        let mut collection = VisitCollection::new();
        for visit in &self.visits {
            collection.add(visit.clone());
        }
        collection
    }
}

impl Default for RegisterSnapshot {
    fn default() -> Self {
        Self::new()
    }
}

/// Load a register snapshot from a JSON file.
///
/// A snapshot whose format version differs from [`SNAPSHOT_VERSION`] is
/// logged as a warning and accepted, unless
/// `config.fail_on_version_mismatch` is set.
pub fn load_snapshot(path: &Path, config: &RegisterConfig) -> Result<RegisterSnapshot> {
    log_operation_start("loading register snapshot", path);
    let start = Instant::now();

    let contents = fs::read_to_string(path).map_err(RegisterError::SnapshotRead)?;
    let snapshot: RegisterSnapshot =
        serde_json::from_str(&contents).map_err(RegisterError::SnapshotParse)?;

    if snapshot.version != SNAPSHOT_VERSION {
        if config.fail_on_version_mismatch {
            return Err(RegisterError::InvalidSnapshot(format!(
                "snapshot version {} does not match expected {}",
                snapshot.version, SNAPSHOT_VERSION
            )));
        }
        log_warning(
            &format!(
                "snapshot version {} differs from expected {}",
                snapshot.version, SNAPSHOT_VERSION
            ),
            Some(path),
        );
    }

    log_operation_complete(
        "loaded",
        path,
        snapshot.patients.len() + snapshot.visits.len(),
        start.elapsed(),
    );
    Ok(snapshot)
}

/// Save a register snapshot to a JSON file, overwriting any previous one.
pub fn save_snapshot(path: &Path, snapshot: &RegisterSnapshot) -> Result<()> {
    log_operation_start("saving register snapshot", path);
    let start = Instant::now();

    let contents =
        serde_json::to_string_pretty(snapshot).map_err(RegisterError::SnapshotSerialize)?;
    fs::write(path, contents).map_err(RegisterError::SnapshotWrite)?;

    log_operation_complete(
        "saved",
        path,
        snapshot.patients.len() + snapshot.visits.len(),
        start.elapsed(),
    );
    Ok(())
}
