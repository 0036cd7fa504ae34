//! Homework HTTP Client
//!
//! A thin, typed HTTP client for the homework review API. It does not retry;
//! callers decide what a failure means.
//!
//! # Example
//!
//! ```no_run
//! use homework_client::PracticumClient;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let practicum = PracticumClient::new(
//!         "https://practicum.yandex.ru/api/user_api/homework_statuses/",
//!         "practicum-token",
//!     );
//!     let statuses = practicum.homework_statuses(0).await?;
//!     println!("{}", statuses);
//!     Ok(())
//! }
//! ```

pub mod error;
mod practicum;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use practicum::PracticumClient;

use serde::de::DeserializeOwned;

/// Longest error body kept in [`ClientError::ApiError`], in characters
///
/// Gateways answer failures with whole HTML pages; only the head is useful.
pub const MAX_ERROR_BODY_CHARS: usize = 200;

/// Handle an API response and deserialize JSON
///
/// This checks the status code and returns an appropriate error if the
/// request failed, or deserializes the response body if successful.
pub(crate) async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();

    if !status.is_success() {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(ClientError::api_error(
            status.as_u16(),
            truncate_chars(error_text, MAX_ERROR_BODY_CHARS),
        ));
    }

    response
        .json()
        .await
        .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
}

/// Cuts `text` down to `max` characters, marking the cut with an ellipsis
fn truncate_chars(text: String, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}…", &text[..cut]),
        None => text,
    }
}
