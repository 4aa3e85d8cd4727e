use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// Error response body.
///
/// Every error status returns this shape: a human-readable message plus an
/// optional map of per-field errors (validation failures, booking conflicts,
/// duplicate signup credentials).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, String>>,
}

impl ErrorDto {
    /// Builds an error body with only a message.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            errors: None,
        }
    }

    /// Builds an error body with a message and per-field errors.
    pub fn with_errors(message: impl Into<String>, errors: BTreeMap<String, String>) -> Self {
        Self {
            message: message.into(),
            errors: Some(errors),
        }
    }
}

/// Plain acknowledgement body, e.g. `{"message": "Successfully deleted"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub message: String,
}

impl MessageDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
