use crate::shared::error::AdcmError;
use crate::shared::Result;

/// Sparse attribute filter over one entity kind
///
/// Every populated field must equal the entity's value exactly (no prefix
/// match, no case folding). Unpopulated fields are ignored.
pub trait SearchCriteria<E> {
    /// Whether `entity` satisfies every populated field
    fn matches(&self, entity: &E) -> bool;

    /// Human-readable form of the populated fields, used in error messages
    fn describe(&self) -> String;
}

/// Compares an optional filter value against the entity's value
pub fn field_matches<T: PartialEq + ?Sized>(filter: Option<&T>, value: &T) -> bool {
    filter.map_or(true, |expected| expected == value)
}

/// Renders the populated `(name, value)` pairs of a criteria set
pub fn describe_fields(fields: &[(&str, Option<String>)]) -> String {
    let populated: Vec<String> = fields
        .iter()
        .filter_map(|(name, value)| value.as_ref().map(|v| format!("{}={}", name, v)))
        .collect();

    if populated.is_empty() {
        "an empty filter".to_string()
    } else {
        populated.join(", ")
    }
}

/// EntityResolver - resolves a full collection to the single matching entity
///
/// ADCM offers no server-side multi-field filtering for these listings, so
/// resolution scans the whole collection locally.
pub struct EntityResolver;

impl EntityResolver {
    /// Returns the only entity matching `criteria`
    ///
    /// # Errors
    /// - `NotFound` when nothing matches
    /// - `AmbiguousQuery` when two or more entities match
    pub fn resolve_one<E, S>(entity: &str, entities: Vec<E>, criteria: &S) -> Result<E>
    where
        S: SearchCriteria<E>,
    {
        let mut matching: Vec<E> = entities
            .into_iter()
            .filter(|candidate| criteria.matches(candidate))
            .collect();

        match matching.len() {
            0 => Err(AdcmError::NotFound {
                entity: entity.to_string(),
                criteria: criteria.describe(),
            }),
            1 => Ok(matching.remove(0)),
            count => Err(AdcmError::AmbiguousQuery {
                entity: entity.to_string(),
                criteria: criteria.describe(),
                matches: count,
            }),
        }
    }
}
