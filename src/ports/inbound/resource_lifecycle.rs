use crate::shared::error::AdcmError;
use crate::shared::Result;

/// ResourceLifecycle - Inbound port for one managed ADCM resource kind
///
/// Resource handlers translate their configuration model into `Spec` /
/// `Search` request objects and call these operations. ADCM objects managed
/// here have no update path: changing a resource means deleting and
/// re-creating it.
pub trait ResourceLifecycle {
    /// Request object describing the resource to create
    type Spec;
    /// Sparse filter resolving exactly one existing resource
    type Search;
    /// Fully realized resource as read back from ADCM
    type Entity;

    /// Resource kind used in messages ("cluster", "host", ...)
    const ENTITY: &'static str;

    /// Creates the resource and returns it as ADCM now reports it
    fn create(&self, spec: Self::Spec) -> Result<Self::Entity>;

    /// Resolves the single resource matching `search`
    ///
    /// # Errors
    /// `NotFound` or `AmbiguousQuery` when the search does not select
    /// exactly one resource
    fn read(&self, search: &Self::Search) -> Result<Self::Entity>;

    /// Always fails: ADCM resources managed here cannot be updated in place
    ///
    /// No request is sent to ADCM.
    fn update(&self, _spec: Self::Spec) -> Result<Self::Entity> {
        Err(AdcmError::unsupported(Self::ENTITY, "update"))
    }

    /// Resolves the resource and deletes it by id
    ///
    /// # Errors
    /// `NotFound` (without issuing a DELETE) when nothing matches
    fn delete(&self, search: &Self::Search) -> Result<()>;
}
