//! Error handling for the antenatal-care register.
//!
//! The decision logic itself is total and cannot fail; errors only arise
//! at the snapshot-store boundary.

/// Specialized error type for register operations
#[derive(Debug, thiserror::Error)]
pub enum RegisterError {
    /// Error reading a snapshot file
    #[error("failed to read snapshot file: {0}")]
    SnapshotRead(std::io::Error),
    /// Error writing a snapshot file
    #[error("failed to write snapshot file: {0}")]
    SnapshotWrite(std::io::Error),
    /// Error parsing snapshot JSON
    #[error("failed to parse snapshot: {0}")]
    SnapshotParse(serde_json::Error),
    /// Error serializing the snapshot to JSON
    #[error("failed to serialize snapshot: {0}")]
    SnapshotSerialize(serde_json::Error),
    /// Snapshot content that deserialized but is not an acceptable register
    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(String),
}

/// Result type for register operations
pub type Result<T> = std::result::Result<T, RegisterError>;
