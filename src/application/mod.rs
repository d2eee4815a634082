/// Application layer - ADCM session, entity clients and use cases
///
/// This layer orchestrates domain services and reaches ADCM only through
/// the outbound ports.
pub mod api;
pub mod diagnostics;
pub mod dto;
pub mod endpoints;
pub mod use_cases;

pub use api::AdcmApi;
