//! Homework Bot
//!
//! Relays homework review status changes to a Telegram chat.
//!
//! Architecture:
//! - Configuration: Credentials and tunables from the environment (and `.env`)
//! - Repositories: HTTP adapters for the review API and the Bot API
//! - Services: Fire-and-forget notification delivery
//! - Scheduler: The poll loop and its dedup state
//!
//! The bot polls the review API every few minutes, formats the newest
//! homework status and sends it to the chat when it changed. Failures are
//! reported to the same chat and never stop the loop.

mod config;
mod error;
mod repository;
mod scheduler;
mod service;

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::{debug, error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::error::ConfigError;
use crate::repository::{HttpHomeworkRepository, TelegramChatRepository};
use crate::scheduler::StatusPoller;
use crate::service::ChatNotifier;
use homework_client::PracticumClient;
use teloxide::Bot;

#[tokio::main]
async fn main() -> Result<()> {
    let dotenv = dotenvy::dotenv();

    let log_file = config::log_file_from(&|key: &str| std::env::var(key).ok());
    if let Err(e) = init_logging(&log_file) {
        eprintln!("Failed to open log file {}: {}", log_file.display(), e);
    }

    match &dotenv {
        Ok(path) => debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => debug!("No .env file found"),
        Err(e) => warn!("Failed to load .env file: {}", e),
    }

    info!("Starting Homework Bot");

    // Missing credentials end the process before any client exists
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            error!("Critical: {}. Shutting down", e);
            std::process::exit(1);
        }
    };
    info!(
        "Loaded configuration: endpoint={}, chat_id={}, log_file={}",
        config.endpoint,
        config.credentials.telegram_chat_id,
        config.log_file.display()
    );

    let http = reqwest::Client::builder()
        .timeout(config.request_timeout)
        .build()
        .context("Failed to build HTTP client")?;

    let practicum = PracticumClient::with_client(
        config.endpoint.clone(),
        config.credentials.practicum_token.clone(),
        http,
    );

    let bot_http = teloxide::net::default_reqwest_settings()
        .timeout(config.request_timeout)
        .build()
        .context("Failed to build Telegram HTTP client")?;
    let bot_api_url = reqwest::Url::parse(&config.telegram_api_url)
        .context("Failed to parse TELEGRAM_API_URL")?;
    let bot = Bot::with_client(config.credentials.telegram_token.clone(), bot_http)
        .set_api_url(bot_api_url);

    let homeworks = Arc::new(HttpHomeworkRepository::new(practicum));
    let chat = Arc::new(TelegramChatRepository::new(
        bot,
        &config.credentials.telegram_chat_id,
    ));
    let notifier = Arc::new(ChatNotifier::new(chat));

    info!("Clients initialized");

    let from_date = chrono::Utc::now().timestamp();
    let poller = StatusPoller::new(&config, homeworks, notifier, from_date);

    tokio::select! {
        _ = poller.run() => {}
        result = tokio::signal::ctrl_c() => {
            result.context("Failed to listen for shutdown signal")?;
            info!("Shutdown signal received, stopping");
        }
    }

    Ok(())
}

/// Loads and validates configuration from environment variables
fn load_config() -> std::result::Result<Config, ConfigError> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

/// Installs the tracing subscriber
///
/// Events go to stdout and, when the file can be opened, to `log_file`.
fn init_logging(log_file: &Path) -> std::io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(log_file);

    let (file_layer, file_error) = match file {
        Ok(file) => (
            Some(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            ),
            None,
        ),
        Err(e) => (None, Some(e)),
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "homework_bot=debug,homework_client=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .with(file_layer)
        .init();

    match file_error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
