//! Scheduler layer for the bot
//!
//! This layer runs the poll loop: fetch the latest statuses, turn the newest
//! one into a message and deliver it when it differs from the last one sent.

pub mod poller;
pub mod state;

pub use poller::StatusPoller;
