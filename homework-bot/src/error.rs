//! Error types for the bot
//!
//! Two closed taxonomies: configuration errors end the process at startup,
//! cycle errors are reported to the chat and the loop carries on.

use homework_client::ClientError;
use homework_core::ValidationError;
use thiserror::Error;

/// Startup configuration errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A mandatory credential is unset or empty
    #[error("Отсутствует обязательная переменная окружения: {0}")]
    MissingCredential(&'static str),

    /// A setting has an unusable value
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Failures that abort a poll cycle and are reported to the chat
#[derive(Debug, Error)]
pub enum CycleError {
    /// The review API could not be queried
    #[error("Эндпоинт недоступен (from_date={from_date}): {source}")]
    Fetch {
        /// Lower time bound the request was made with
        from_date: i64,
        /// Underlying client failure
        #[source]
        source: ClientError,
    },

    /// The review API answered with an unexpected shape
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
