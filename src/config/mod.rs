//! Configuration for the antenatal-care register.

/// Configuration for register behaviour
#[derive(Debug, Clone)]
pub struct RegisterConfig {
    /// Maximum number of alerts retained, newest first
    pub alert_capacity: usize,
    /// Maximum number of audit entries retained, newest first
    pub audit_capacity: usize,
    /// Whether a snapshot with a different format version is rejected on
    /// load instead of merely logged
    pub fail_on_version_mismatch: bool,
}

impl Default for RegisterConfig {
    fn default() -> Self {
        Self {
            alert_capacity: 50,
            audit_capacity: 100,
            fail_on_version_mismatch: false,
        }
    }
}
