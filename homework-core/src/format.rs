//! Notification text
//!
//! Builds the messages sent to the chat: status changes for a homework
//! record, and failure reports for a poll cycle that went wrong.

use serde_json::Value;
use std::fmt::Display;

use crate::domain::homework::HomeworkRecord;
use crate::validation::ValidationError;

/// Formats a homework record as a status change message
///
/// The sentence and the verdict are joined without a space; chat history
/// produced by earlier deployments relies on this exact text.
pub fn format_status(record: &Value) -> Result<String, ValidationError> {
    let record = HomeworkRecord::from_value(record)?;
    Ok(format!(
        "Изменился статус проверки работы \"{}\".{}",
        record.homework_name,
        record.status.verdict()
    ))
}

/// Longest text the Bot API accepts in one message, in characters
pub const MAX_MESSAGE_CHARS: usize = 4096;

/// Formats a poll cycle failure for the chat
///
/// The text is cut to [`MAX_MESSAGE_CHARS`], ellipsis included.
pub fn failure_message(error: &impl Display) -> String {
    let message = format!("Сбой в работе программы: {}", error);
    match (
        message.char_indices().nth(MAX_MESSAGE_CHARS - 1),
        message.chars().nth(MAX_MESSAGE_CHARS),
    ) {
        (Some((cut, _)), Some(_)) => format!("{}…", &message[..cut]),
        _ => message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::status::HomeworkStatus;
    use serde_json::json;

    #[test]
    fn test_format_every_documented_status() {
        for status in HomeworkStatus::ALL {
            let record = json!({"homework_name": "hw1", "status": status.code()});
            assert_eq!(
                format_status(&record).unwrap(),
                format!(
                    "Изменился статус проверки работы \"hw1\".{}",
                    status.verdict()
                )
            );
        }
    }

    #[test]
    fn test_format_approved_literal() {
        let record = json!({"homework_name": "hw1", "status": "approved"});
        assert_eq!(
            format_status(&record).unwrap(),
            "Изменился статус проверки работы \"hw1\".Работа проверена: ревьюеру всё понравилось. Ура!"
        );
    }

    #[test]
    fn test_format_rejects_non_object() {
        assert_eq!(
            format_status(&json!(["hw1", "approved"])).unwrap_err(),
            ValidationError::NotAMapping {
                subject: "записи о работе"
            }
        );
    }

    #[test]
    fn test_format_requires_name() {
        assert_eq!(
            format_status(&json!({"status": "approved"})).unwrap_err(),
            ValidationError::MissingField {
                field: "homework_name"
            }
        );
    }

    #[test]
    fn test_format_rejects_undocumented_status() {
        for status in ["", "pending", "APPROVED", "approved "] {
            let record = json!({"homework_name": "hw1", "status": status});
            assert_eq!(
                format_status(&record).unwrap_err(),
                ValidationError::UndocumentedStatus {
                    status: Some(status.to_string())
                }
            );
        }

        let missing = json!({"homework_name": "hw1"});
        assert_eq!(
            format_status(&missing).unwrap_err(),
            ValidationError::UndocumentedStatus { status: None }
        );
    }

    #[test]
    fn test_failure_message() {
        let error = ValidationError::MissingField { field: "homeworks" };
        assert_eq!(
            failure_message(&error),
            "Сбой в работе программы: Ожидался ключ \"homeworks\" в ответе"
        );
    }

    #[test]
    fn test_failure_message_fits_one_chat_message() {
        let message = failure_message(&"ы".repeat(10_000));
        assert_eq!(message.chars().count(), MAX_MESSAGE_CHARS);
        assert!(message.starts_with("Сбой в работе программы: ыыы"));
        assert!(message.ends_with('…'));

        let exact = "x".repeat(MAX_MESSAGE_CHARS - "Сбой в работе программы: ".chars().count());
        assert_eq!(failure_message(&exact).chars().count(), MAX_MESSAGE_CHARS);
        assert!(!failure_message(&exact).ends_with('…'));
    }
}
