//! Homework Core
//!
//! Core types and checks for the homework review relay.
//!
//! This crate contains:
//! - Domain types: review statuses and the homework record
//! - Validation: shape checks for the review API response
//! - Formatting: turning a homework record into the notification text
//!
//! Nothing here performs I/O; the client and bot crates build on top of it.

pub mod domain;
pub mod format;
pub mod validation;

pub use domain::homework::HomeworkRecord;
pub use domain::status::HomeworkStatus;
pub use format::{MAX_MESSAGE_CHARS, failure_message, format_status};
pub use validation::{ValidationError, check_response};
