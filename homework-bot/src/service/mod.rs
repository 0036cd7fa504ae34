//! Service layer
//!
//! Services hold the small amount of policy that sits between the poll
//! loop and the repositories.
//!
//! All services are trait-based to enable testing and dependency injection.

mod notifier;

// Re-export traits
pub use notifier::NotificationService;

// Re-export implementations
pub use notifier::ChatNotifier;
