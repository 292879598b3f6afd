//! Domain models for the antenatal-care register
//!
//! This module contains the core entity models used throughout the
//! application: patients, antenatal visits, delivery outcomes, and the
//! alert/audit records derived from them.

// Re-export entity models
pub mod alert;
pub mod collections;
pub mod delivery;
pub mod patient;
pub mod traits;
pub mod types;
pub mod visit;

// Re-export commonly used types
pub use alert::{AuditEntry, SystemAlert};
pub use collections::ModelCollection;
pub use delivery::DeliveryOutcome;
pub use patient::{Patient, PatientCollection};
pub use traits::EntityModel;
pub use types::*;
pub use visit::{AncVisit, VisitCollection, VisitVitals};
