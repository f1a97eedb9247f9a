//! Service layer.
//!
//! Services hold the notification logic shared by the CLI and library users.

pub mod notifications;

pub use notifications::NotificationService;
