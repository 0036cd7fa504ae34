//! Core domain types
//!
//! The review API reports homework submissions with a status code. These
//! types give that data a typed shape once it has passed validation.

pub mod homework;
pub mod status;
