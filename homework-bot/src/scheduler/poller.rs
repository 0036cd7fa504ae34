//! Status poller
//!
//! Polls the review API on a fixed period and relays status changes of the
//! newest homework to the chat. A cycle never ends the loop: fetch and
//! validation failures are reported to the chat, formatting failures are
//! only logged, and the loop always sleeps before the next cycle.

use chrono::Utc;
use homework_core::{check_response, failure_message, format_status};
use std::sync::Arc;
use tokio::time::{self, Duration};
use tracing::{debug, error, info};

use crate::config::Config;
use crate::error::CycleError;
use crate::repository::HomeworkRepository;
use crate::scheduler::state::PollState;
use crate::service::NotificationService;

/// What a single poll cycle ended with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// A new status message was handed to the notifier
    Notified,

    /// The status message matches the last one sent
    Unchanged,

    /// The API reported no homeworks
    NoHomeworks,

    /// The newest homework could not be formatted
    FormatFailed,

    /// Fetch or validation failed; `notified` tells whether the failure
    /// report passed the dedup gate
    Failed { notified: bool },
}

/// Poll loop that relays homework status changes
pub struct StatusPoller {
    homeworks: Arc<dyn HomeworkRepository>,
    notifier: Arc<dyn NotificationService>,
    state: PollState,
    poll_interval: Duration,
    advance_from_date: bool,
    from_date: i64,
}

impl StatusPoller {
    /// Creates a new status poller
    ///
    /// # Arguments
    /// * `config` - Bot configuration (poll interval, timestamp policy)
    /// * `homeworks` - Source of homework statuses
    /// * `notifier` - Destination for status and failure messages
    /// * `from_date` - Initial lower time bound, Unix epoch seconds
    pub fn new(
        config: &Config,
        homeworks: Arc<dyn HomeworkRepository>,
        notifier: Arc<dyn NotificationService>,
        from_date: i64,
    ) -> Self {
        Self {
            homeworks,
            notifier,
            state: PollState::new(),
            poll_interval: config.poll_interval,
            advance_from_date: config.advance_from_date,
            from_date,
        }
    }

    /// Current lower time bound used for fetching
    #[cfg(test)]
    pub fn from_date(&self) -> i64 {
        self.from_date
    }

    /// Dedup state
    #[cfg(test)]
    pub fn state(&self) -> &PollState {
        &self.state
    }

    /// Starts the polling loop
    ///
    /// Runs until the surrounding task is dropped.
    pub async fn run(mut self) {
        info!(
            "Starting status poller (interval: {:?}, from_date: {})",
            self.poll_interval, self.from_date
        );

        loop {
            let outcome = self.run_cycle().await;
            debug!("Cycle finished: {:?}", outcome);

            time::sleep(self.poll_interval).await;
        }
    }

    /// Performs a single poll cycle
    pub async fn run_cycle(&mut self) -> CycleOutcome {
        let cycle_started = Utc::now().timestamp();

        match self.poll_once().await {
            Ok(outcome) => {
                if self.advance_from_date && outcome != CycleOutcome::FormatFailed {
                    self.from_date = cycle_started;
                }
                outcome
            }
            Err(e) => self.report_failure(e).await,
        }
    }

    async fn poll_once(&mut self) -> Result<CycleOutcome, CycleError> {
        let from_date = self.from_date;
        let response = self
            .homeworks
            .fetch(from_date)
            .await
            .map_err(|source| CycleError::Fetch { from_date, source })?;

        let homeworks = check_response(&response)?;

        let Some(latest) = homeworks.first() else {
            debug!("No homework status changes");
            return Ok(CycleOutcome::NoHomeworks);
        };

        let message = match format_status(latest) {
            Ok(message) => message,
            Err(e) => {
                error!("Failed to format homework status: {}", e);
                return Ok(CycleOutcome::FormatFailed);
            }
        };

        if self.deliver(message).await {
            Ok(CycleOutcome::Notified)
        } else {
            Ok(CycleOutcome::Unchanged)
        }
    }

    async fn report_failure(&mut self, failure: CycleError) -> CycleOutcome {
        let message = failure_message(&failure);
        let notified = self.deliver(message).await;

        match &failure {
            CycleError::Fetch { from_date, source } => {
                error!("Failed to fetch homework statuses (from_date={}): {}", from_date, source);
            }
            CycleError::Validation(e) => {
                error!("Unexpected review API response: {}", e);
            }
        }

        CycleOutcome::Failed { notified }
    }

    /// Hands `message` to the notifier unless it repeats the last one
    ///
    /// The state is updated whether or not delivery succeeds.
    async fn deliver(&mut self, message: String) -> bool {
        if self.state.is_duplicate(&message) {
            debug!("Message unchanged, skipping send");
            return false;
        }

        self.notifier.notify(&message).await;
        self.state.record(message);
        true
    }
}
