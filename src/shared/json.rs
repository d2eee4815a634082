use crate::shared::error::AdcmError;
use crate::shared::Result;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    results: Vec<T>,
}

/// Decodes a JSON value into `T`, naming `context` in the error on failure
pub fn decode<T: DeserializeOwned>(value: Value, context: &str) -> Result<T> {
    serde_json::from_value(value).map_err(|e| AdcmError::malformed(context, e))
}

/// Unwraps the `{ "results": [...] }` envelope of a paginated ADCM listing
///
/// Only the first page is read; `next`/`previous` links are ignored.
pub fn unwrap_results<T: DeserializeOwned>(value: Value, context: &str) -> Result<Vec<T>> {
    let envelope: Envelope<T> = decode(value, context)?;
    Ok(envelope.results)
}

/// Decodes a listing that ADCM returns either as a bare array or wrapped in
/// the paginated envelope, depending on the endpoint
pub fn decode_collection<T: DeserializeOwned>(value: Value, context: &str) -> Result<Vec<T>> {
    match value {
        Value::Array(_) => decode(value, context),
        Value::Object(_) => unwrap_results(value, context),
        other => Err(AdcmError::malformed(
            context,
            format!("expected a JSON array or results envelope, got {}", other),
        )),
    }
}
