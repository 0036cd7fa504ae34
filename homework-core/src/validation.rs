//! Response validation
//!
//! Shape checks for the review API response. Only the envelope is checked
//! here; individual homework records are checked when they are formatted.

use serde_json::Value;
use thiserror::Error;

/// Errors raised when API data does not have the expected shape
///
/// Display text is user-facing: it ends up in failure notifications.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Value is not a JSON object
    #[error("Ожидался словарь в качестве {subject}")]
    NotAMapping {
        /// What was expected to be an object
        subject: &'static str,
    },

    /// Required key is absent
    #[error("Ожидался ключ \"{field}\" в ответе")]
    MissingField {
        /// Name of the missing key
        field: &'static str,
    },

    /// Key is present but holds the wrong kind of value
    #[error("Ожидался список под ключом \"{field}\"")]
    WrongType {
        /// Name of the offending key
        field: &'static str,
    },

    /// Status is missing or not in the catalog
    #[error(
        "Недокументированный статус работы: {}",
        .status.as_deref().unwrap_or("<отсутствует>")
    )]
    UndocumentedStatus {
        /// Raw status, if one was present
        status: Option<String>,
    },
}

/// Checks the envelope of a review API response
///
/// The response must be an object holding a `homeworks` array. On success
/// the homeworks are returned as-is, newest first.
pub fn check_response(response: &Value) -> Result<&[Value], ValidationError> {
    let body = response.as_object().ok_or(ValidationError::NotAMapping {
        subject: "ответа API",
    })?;

    let homeworks = body.get("homeworks").ok_or(ValidationError::MissingField {
        field: "homeworks",
    })?;

    homeworks
        .as_array()
        .map(Vec::as_slice)
        .ok_or(ValidationError::WrongType { field: "homeworks" })
}
