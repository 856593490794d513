use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::store::error::MutatorError;

/// A named request to change a slice.
///
/// Actions are immutable once built. The dispatcher routes them by
/// [`kind`](Action::kind), which serializes as `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    payload: Option<Value>,
}

impl Action {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            payload: None,
        }
    }

    pub fn with_payload(kind: impl Into<String>, payload: Value) -> Self {
        Self {
            kind: kind.into(),
            payload: Some(payload),
        }
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn payload(&self) -> Option<&Value> {
        self.payload.as_ref()
    }

    /// Decode the payload into `T`.
    ///
    /// Mutators that require a payload use this so a missing or malformed
    /// payload surfaces as a [`MutatorError`] instead of a panic.
    pub fn payload_as<T: DeserializeOwned>(&self) -> Result<T, MutatorError> {
        let value = self.payload.as_ref().ok_or(MutatorError::MissingPayload)?;
        T::deserialize(value).map_err(|e| MutatorError::InvalidPayload(e.to_string()))
    }
}
