//! Repository layer
//!
//! Repositories are thin adapters over the HTTP clients. They give the poll
//! loop two narrow interfaces (fetch statuses, send text) without any
//! business logic.
//!
//! All repositories are trait-based so the loop can run against test doubles.

mod chat;
mod homework;

// Re-export traits
pub use chat::ChatRepository;
pub use homework::HomeworkRepository;

// Re-export implementations
pub use chat::TelegramChatRepository;
pub use homework::HttpHomeworkRepository;
