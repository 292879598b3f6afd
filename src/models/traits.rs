//! Trait definitions for domain models
//!
//! This module defines the core traits that all domain models implement,
//! providing common functionality and interfaces for working with models.

use std::hash::Hash;

/// A trait that all domain models must implement.
///
/// The `EntityModel` trait provides common functionality for all models
/// in the system, including identifier access and conversion methods.
pub trait EntityModel: Clone + Send + Sync + std::fmt::Debug {
    /// The type of identifier used for this model
    type Id: Clone + Eq + Hash + Send + Sync + std::fmt::Debug;

    /// Get the unique identifier for this model
    fn id(&self) -> &Self::Id;

    /// Create a unique key string representation of the identifier
    fn key(&self) -> String;
}
