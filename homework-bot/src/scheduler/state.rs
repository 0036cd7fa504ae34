//! Poll state
//!
//! The only mutable state of the bot: the last message handed to the
//! notifier. It lives for the process lifetime and is never persisted.

/// Deduplication state owned by the poll loop
#[derive(Debug, Default)]
pub struct PollState {
    last_delivered: Option<String>,
}

impl PollState {
    /// Creates an empty state
    pub fn new() -> Self {
        Self::default()
    }

    /// Last message a send was attempted for
    #[cfg(test)]
    pub fn last_delivered(&self) -> Option<&str> {
        self.last_delivered.as_deref()
    }

    /// Whether `message` repeats the last attempted one
    pub fn is_duplicate(&self, message: &str) -> bool {
        self.last_delivered.as_deref() == Some(message)
    }

    /// Records an attempted send
    pub fn record(&mut self, message: String) {
        self.last_delivered = Some(message);
    }
}
