pub mod readiness_policy;

pub use readiness_policy::ReadinessPolicy;
