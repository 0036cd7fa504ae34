//! Bot configuration
//!
//! Credentials and tunables for the relay. Everything is read once at
//! startup; the three credentials are mandatory and their absence stops the
//! process before any network client is created.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::ConfigError;

/// Default homework statuses endpoint
pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Default Telegram Bot API base URL
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// Secrets needed to poll the review API and deliver notifications
#[derive(Clone)]
pub struct Credentials {
    /// OAuth token for the review API
    pub practicum_token: String,

    /// Telegram bot token
    pub telegram_token: String,

    /// Chat that receives the notifications
    pub telegram_chat_id: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("practicum_token", &"<redacted>")
            .field("telegram_token", &"<redacted>")
            .field("telegram_chat_id", &self.telegram_chat_id)
            .finish()
    }
}

/// Bot configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// API and chat credentials
    pub credentials: Credentials,

    /// Homework statuses endpoint
    pub endpoint: String,

    /// Telegram Bot API base URL
    pub telegram_api_url: String,

    /// Pause between poll cycles
    pub poll_interval: Duration,

    /// Timeout for each outbound HTTP request
    pub request_timeout: Duration,

    /// File that receives a copy of the log output
    pub log_file: PathBuf,

    /// Move `from_date` forward after each successful cycle
    pub advance_from_date: bool,
}

impl Config {
    /// Creates a new configuration with defaults
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            telegram_api_url: DEFAULT_TELEGRAM_API_URL.to_string(),
            poll_interval: Duration::from_secs(600),
            request_timeout: Duration::from_secs(30),
            log_file: PathBuf::from("main.log"),
            advance_from_date: false,
        }
    }

    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - PRACTICUM_TOKEN (required)
    /// - TELEGRAM_TOKEN (required)
    /// - TELEGRAM_CHAT_ID (required)
    /// - PRACTICUM_ENDPOINT (optional, default: Practicum homework statuses URL)
    /// - TELEGRAM_API_URL (optional, default: https://api.telegram.org)
    /// - POLL_INTERVAL (optional, seconds, default: 600)
    /// - REQUEST_TIMEOUT (optional, seconds, default: 30)
    /// - LOG_FILE (optional, default: main.log)
    /// - ADVANCE_FROM_DATE (optional, true/false, default: false)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Creates configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .ok_or(ConfigError::MissingCredential(key))
        };

        let credentials = Credentials {
            practicum_token: required("PRACTICUM_TOKEN")?,
            telegram_token: required("TELEGRAM_TOKEN")?,
            telegram_chat_id: required("TELEGRAM_CHAT_ID")?,
        };

        let mut config = Self::new(credentials);

        if let Some(endpoint) = lookup("PRACTICUM_ENDPOINT") {
            config.endpoint = endpoint;
        }

        if let Some(api_url) = lookup("TELEGRAM_API_URL") {
            config.telegram_api_url = api_url;
        }

        if let Some(secs) = lookup("POLL_INTERVAL").and_then(|s| s.parse::<u64>().ok()) {
            config.poll_interval = Duration::from_secs(secs);
        }

        if let Some(secs) = lookup("REQUEST_TIMEOUT").and_then(|s| s.parse::<u64>().ok()) {
            config.request_timeout = Duration::from_secs(secs);
        }

        config.log_file = log_file_from(&lookup);

        config.advance_from_date = lookup("ADVANCE_FROM_DATE")
            .map(|s| matches!(s.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Ok(config)
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, url) in [
            ("PRACTICUM_ENDPOINT", &self.endpoint),
            ("TELEGRAM_API_URL", &self.telegram_api_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::Invalid(format!(
                    "{} must start with http:// or https://",
                    name
                )));
            }
        }

        if self.poll_interval.as_secs() == 0 {
            return Err(ConfigError::Invalid(
                "poll_interval must be greater than 0".to_string(),
            ));
        }

        if self.request_timeout.as_secs() == 0 {
            return Err(ConfigError::Invalid(
                "request_timeout must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Resolves the log file path from `LOG_FILE`, defaulting to `main.log`
///
/// Logging starts before the rest of the configuration is loaded, so the
/// path is available on its own.
pub fn log_file_from<F>(lookup: &F) -> PathBuf
where
    F: Fn(&str) -> Option<String>,
{
    lookup("LOG_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("main.log"))
}
