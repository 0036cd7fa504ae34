//! Notification service
//!
//! Fire-and-forget delivery: one attempt per message, failures end up in
//! the log and nowhere else.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, error};

use crate::repository::ChatRepository;

/// Service trait for user notifications
#[async_trait]
pub trait NotificationService: Send + Sync {
    /// Attempts to deliver a message
    ///
    /// Returns once the attempt is over. The outcome is not reported.
    async fn notify(&self, message: &str);
}

/// Notifier backed by a chat repository
pub struct ChatNotifier {
    chat: Arc<dyn ChatRepository>,
}

impl ChatNotifier {
    /// Creates a new chat notifier
    pub fn new(chat: Arc<dyn ChatRepository>) -> Self {
        Self { chat }
    }
}

#[async_trait]
impl NotificationService for ChatNotifier {
    async fn notify(&self, message: &str) {
        match self.chat.send(message).await {
            Ok(()) => debug!("Message sent: {}", message),
            Err(e) => error!("Failed to send message: {:#}", e),
        }
    }
}
