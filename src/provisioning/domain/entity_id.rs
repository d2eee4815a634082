use crate::shared::error::AdcmError;
use crate::shared::Result;
use serde::{Deserialize, Serialize};

/// Server-assigned numeric identifier of an ADCM object
///
/// Identifiers are never zero once assigned; `EntityId::new` enforces that
/// for values coming from users. Values decoded from ADCM responses are
/// trusted as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(i64);

impl EntityId {
    pub fn new(id: i64) -> Result<Self> {
        if id <= 0 {
            return Err(AdcmError::validation(format!(
                "Identifier must be a positive number, got {}",
                id
            )));
        }
        Ok(Self(id))
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// `{"id": N}` body returned by every ADCM create call
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Created {
    pub id: EntityId,
}
