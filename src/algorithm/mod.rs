//! Algorithm implementations for antenatal case management
//!
//! This module contains the pure decision logic of the register: risk
//! scoring and triage classification, gestational-age calculation, the
//! fetal size lookup, and the priority worklist derived from them.

pub mod fetal_size;
pub mod gestation;
pub mod risk;
pub mod worklist;
