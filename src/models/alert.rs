//! System alerts and audit log entries
//!
//! Alerts are raised when a finalized visit classifies into a critical
//! triage tier; the audit log records every register mutation. Both lists
//! are kept newest-first and capped, and neither reads the clock itself:
//! timestamps always come from the caller.

use crate::algorithm::risk::TriageLabel;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A notification about a patient requiring urgent attention
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemAlert {
    /// Alert identifier
    pub id: String,
    /// Register id of the affected patient
    pub patient_id: String,
    /// Name of the affected patient
    pub patient_name: String,
    /// Human-readable alert message
    pub message: String,
    /// When the triggering classification was made
    pub timestamp: DateTime<Utc>,
    /// Whether a staff member has acknowledged the alert
    #[serde(default)]
    pub is_read: bool,
}

impl SystemAlert {
    /// Build an emergency alert for a critical triage result.
    ///
    /// Returns `None` for non-critical tiers: only HITAM and MERAH
    /// classifications raise alerts.
    #[must_use]
    pub fn for_triage(
        patient_id: &str,
        patient_name: &str,
        label: TriageLabel,
        timestamp: DateTime<Utc>,
    ) -> Option<Self> {
        if !label.is_critical() {
            return None;
        }
        Some(Self {
            id: format!("alert-{}", timestamp.timestamp_millis()),
            patient_id: patient_id.to_string(),
            patient_name: patient_name.to_string(),
            message: format!("Risiko {label} terdeteksi!"),
            timestamp,
            is_read: false,
        })
    }

    /// Mark the alert as acknowledged
    pub const fn mark_read(&mut self) {
        self.is_read = true;
    }
}

/// Insert an alert at the front of the list, enforcing the capacity cap
pub fn push_alert(alerts: &mut Vec<SystemAlert>, alert: SystemAlert, capacity: usize) {
    alerts.insert(0, alert);
    alerts.truncate(capacity);
}

/// One entry in the register's audit trail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// Entry identifier
    pub id: String,
    /// When the action happened
    pub timestamp: DateTime<Utc>,
    /// Id of the acting staff member ("system" for internal events)
    pub actor_id: String,
    /// Display name of the actor
    pub actor_name: String,
    /// Action code, e.g. "REGISTER_PATIENT"
    pub action: String,
    /// Subsystem the action belongs to, e.g. "PATIENT", "ANC"
    pub module: String,
    /// Free-text details
    pub details: String,
}

impl AuditEntry {
    /// Create a new audit entry
    #[must_use]
    pub fn new(
        timestamp: DateTime<Utc>,
        actor_id: &str,
        actor_name: &str,
        action: &str,
        module: &str,
        details: &str,
    ) -> Self {
        Self {
            id: format!("log-{}", timestamp.timestamp_millis()),
            timestamp,
            actor_id: actor_id.to_string(),
            actor_name: actor_name.to_string(),
            action: action.to_string(),
            module: module.to_string(),
            details: details.to_string(),
        }
    }
}

/// Insert an audit entry at the front of the trail, enforcing the cap
pub fn push_audit(log: &mut Vec<AuditEntry>, entry: AuditEntry, capacity: usize) {
    log.insert(0, entry);
    log.truncate(capacity);
}
