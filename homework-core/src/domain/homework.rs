//! Homework record
//!
//! A single submission as reported by the review API, reduced to the two
//! fields the relay cares about.

use serde_json::Value;

use super::status::HomeworkStatus;
use crate::validation::ValidationError;

/// A validated homework submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeworkRecord {
    /// Name of the submitted work
    pub homework_name: String,

    /// Current review status
    pub status: HomeworkStatus,
}

impl HomeworkRecord {
    /// Builds a record from an untyped API value
    ///
    /// Checks run in order: the value must be an object, it must carry a
    /// `homework_name` key, and its `status` must be a documented code. A
    /// missing or non-string status counts as undocumented.
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        let record = value.as_object().ok_or(ValidationError::NotAMapping {
            subject: "записи о работе",
        })?;

        let homework_name = match record.get("homework_name") {
            Some(Value::String(name)) => name.clone(),
            Some(other) => other.to_string(),
            None => {
                return Err(ValidationError::MissingField {
                    field: "homework_name",
                });
            }
        };

        let status = match record.get("status") {
            Some(Value::String(code)) => code.parse::<HomeworkStatus>()?,
            Some(other) => {
                return Err(ValidationError::UndocumentedStatus {
                    status: Some(other.to_string()),
                });
            }
            None => return Err(ValidationError::UndocumentedStatus { status: None }),
        };

        Ok(Self {
            homework_name,
            status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value_ignores_extra_fields() {
        let record = HomeworkRecord::from_value(&json!({
            "id": 123,
            "homework_name": "user__hw05.zip",
            "status": "rejected",
            "reviewer_comment": "fix the tests",
        }))
        .unwrap();

        assert_eq!(record.homework_name, "user__hw05.zip");
        assert_eq!(record.status, HomeworkStatus::Rejected);
    }

    #[test]
    fn test_from_value_non_string_status() {
        let err = HomeworkRecord::from_value(&json!({"homework_name": "hw", "status": 1}))
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::UndocumentedStatus {
                status: Some("1".to_string())
            }
        );
    }

    #[test]
    fn test_from_value_non_string_name() {
        let record =
            HomeworkRecord::from_value(&json!({"homework_name": 42, "status": "approved"}))
                .unwrap();
        assert_eq!(record.homework_name, "42");
    }
}
