//! Provisioning domain: ADCM entities, search criteria, configuration merge
//! and the readiness policy used while services come up.
pub mod domain;
pub mod policies;
pub mod services;
